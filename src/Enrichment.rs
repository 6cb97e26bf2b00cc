/// HTTP client trait for dependency injection, its reqwest implementation and
/// the error types shared by the lookups
pub mod http_client;
/// compound metadata from PubChem PUG REST
pub mod pubchem_api;
/// short text summary from the Wikipedia REST API
pub mod wiki_summary;
