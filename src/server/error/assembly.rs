use thiserror::Error;

use crate::server::hypermedia::resource::ResourceType;

/// Failures raised while turning domain models into hypermedia representations.
///
/// Every variant indicates a programming fault upstream of the assembler rather than
/// a problem with the client's request, so all of them surface as 500 Internal Server
/// Error through `AppError`.
#[derive(Error, Debug)]
pub enum AssemblyError {
    /// Assembler input violated a precondition.
    ///
    /// Raised for malformed pages (zero size, more content than the page size or the
    /// reported total) handed to the page adapter or the paged assembler.
    #[error("Invalid assembler argument: {0}")]
    InvalidArgument(String),

    /// A link could not be built because the instance has no identifier.
    ///
    /// Only persisted instances carry an id; assembling a transient one is a bug in the
    /// caller.
    #[error("Cannot build a link to {resource}: instance has no identifier")]
    InvalidResourceReference {
        /// Resource type whose item link was requested
        resource: ResourceType,
    },

    /// An assembler tried to embed a resource type its parent does not declare.
    ///
    /// Embedding is restricted to the static declaration on `ResourceType::embeds` so the
    /// representation graph stays acyclic.
    #[error("{parent} does not declare {child} as an embedded relation")]
    UndeclaredEmbedding {
        /// Resource type of the representation being built
        parent: ResourceType,
        /// Resource type that was offered for embedding
        child: ResourceType,
    },

    /// Embedded content could not be converted to its serialized form.
    #[error("Failed to serialize embedded {resource} content: {source}")]
    Content {
        /// Resource type of the embedded representation
        resource: ResourceType,
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },
}
