use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Invalid serialized tunnel vision state: {source}"))]
    DecodeState { source: serde_json::Error },

    #[snafu(display("Failed to encode tunnel vision state: {source}"))]
    EncodeState { source: serde_json::Error },
}
