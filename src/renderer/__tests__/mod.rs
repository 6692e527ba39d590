#[cfg(test)]
mod writer;


#[cfg(test)]
mod ast;
