#[cfg(test)]
pub mod arbitrary;
