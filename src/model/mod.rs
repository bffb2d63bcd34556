/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Static endpoint descriptors
pub mod endpoint;
/// Request dispatcher
pub mod http;
/// Caller-supplied query arguments
pub mod query;
/// Request models and query builders
pub mod requests;
/// Record streams for streaming endpoints
pub mod stream;
