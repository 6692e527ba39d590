
#[cfg(test)]
mod operand;
