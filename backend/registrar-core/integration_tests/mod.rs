mod credentials;
mod helpers;
mod json_rpc;
mod registrar;
