//! Request processing shared by every controller.

pub mod auth;

#[cfg(test)]
mod test;
