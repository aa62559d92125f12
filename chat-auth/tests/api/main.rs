mod helpers;
mod login;
mod me;
mod register;
