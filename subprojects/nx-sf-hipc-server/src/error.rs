//! Error taxonomy for the dispatch core.

/// Kinds of failure the dispatch core itself can raise, distinct from a
/// handler's own `Result<(), i32>` (a libnx-style raw result code, reported
/// back to the client as a normal CMIF error reply rather than aborting
/// dispatch).
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// No dispatch entry matched the request's `(cmd_id, host version)`.
    #[error("unknown command")]
    UnknownCommand,
    /// The request's shape (buffer/handle/object counts, raw data size)
    /// didn't match what the matched entry's metadata requires.
    #[error("malformed request")]
    InvalidRequest,
    /// A pointer-buffer carve would have crossed into data already carved.
    #[error("pointer buffer exhausted")]
    PointerBufferOverflow,
    /// A DomainObjectId named in the request isn't bound in this domain.
    #[error("invalid domain object id")]
    InvalidObjectId,
    /// Too many out-objects/out-handles for the available move-handle slots.
    #[error("too many output handles")]
    TooManyOutHandles,
}

pub type Result<T> = core::result::Result<T, DispatchError>;

impl DispatchError {
    /// The libnx-style raw result code reported to the client. These mirror
    /// `sf::hipc::ResultRequestInvalid` / friends in spirit -- module
    /// `0x101` (copied from the workspace's existing `nx-svc` error module
    /// numbering convention) with per-kind description bits.
    pub const fn to_raw_result(self) -> u32 {
        const MODULE: u32 = 0x101;
        let description = match self {
            DispatchError::UnknownCommand => 1,
            DispatchError::InvalidRequest => 2,
            DispatchError::PointerBufferOverflow => 3,
            DispatchError::InvalidObjectId => 4,
            DispatchError::TooManyOutHandles => 5,
        };
        MODULE | (description << 9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_results_are_distinct_per_kind() {
        let codes = [
            DispatchError::UnknownCommand.to_raw_result(),
            DispatchError::InvalidRequest.to_raw_result(),
            DispatchError::PointerBufferOverflow.to_raw_result(),
            DispatchError::InvalidObjectId.to_raw_result(),
            DispatchError::TooManyOutHandles.to_raw_result(),
        ];
        for i in 0..codes.len() {
            for j in (i + 1)..codes.len() {
                assert_ne!(codes[i], codes[j]);
            }
        }
    }
}
