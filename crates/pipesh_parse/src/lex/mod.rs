mod input;
pub mod lexer;

#[cfg(test)]
mod tests;
