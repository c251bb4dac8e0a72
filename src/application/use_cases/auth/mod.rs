pub mod get_profile;
pub mod login;
pub mod signup;
