use thiserror::Error;

/// Errors returned by the strict resolution and quoting variants.
///
/// The default entry points never produce these: unknown or unpriced ids
/// degrade to empty results and zero contributions, because stale client
/// state is expected rather than exceptional.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// The id exists nowhere in the supplied catalog(s).
    #[error("service type '{0}' not found in the catalog")]
    UnknownServiceType(String),

    /// The service type exists but carries no part pricing in any source.
    #[error("service type '{0}' has no part pricing")]
    UnpricedServiceType(String),
}
