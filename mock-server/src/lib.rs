/*!
In-memory stand-in for the Puppy Bowl roster API.

Serves the same envelopes as the public service under `/api/{cohort}/players`, so the browser
client can be developed and exercised without network access. State lives only as long as
the process.
*/

pub mod routes;
pub mod store;

pub use routes::api;
pub use store::{SharedStore, Store};
