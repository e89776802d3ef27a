//! Process-lifetime in-memory repositories for the RoboSapienZ content core.

pub mod comments;
pub mod posts;
pub mod seed;
