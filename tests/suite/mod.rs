mod flow;
mod input;
mod persistence;
