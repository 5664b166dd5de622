//! Authentication module for the CoinMarketCap APIs.
//!
//! Both APIs authenticate with a static key carried in a request header;
//! this module only stores and provides that key.

mod credentials;

pub use credentials::{
    API_KEY_ENV_VAR, Credentials, CredentialsProvider, EnvCredentials, StaticCredentials,
};
