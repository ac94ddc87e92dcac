mod add;
mod config;
mod pool;
