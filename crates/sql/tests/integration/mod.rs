mod config;
mod deprecation;
