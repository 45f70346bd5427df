mod common;
mod controller;
mod query;
