pub mod advisory;
pub mod health;
pub mod journal;
pub mod server;

#[cfg(test)]
mod test;
