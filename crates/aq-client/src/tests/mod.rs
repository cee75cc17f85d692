mod client;
mod identity;
mod login_url;
