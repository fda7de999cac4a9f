/// Unique paper identifier (stable across runs).
/// Example: `oai:arXiv.org:cs/9901001`
pub type PaperId = String;
/// Raw author-name string exactly as it appears in a paper record.
/// Examples: `John Smith`, `  Doe, Jane `
pub type RawName = String;
/// Densely-assigned non-negative author identity.
/// Assigned in first-seen order over the time-sorted corpus.
pub type AuthorId = usize;
/// Pound-joined canonical representation of a citation author's name parts.
/// Examples: `John#Smith`, `J.#Doe`
pub type CanonicalToken = String;
/// Continuous event time: fractional days elapsed since the configured epoch.
/// Example: `1672.8317` (day 1672 plus jitter)
pub type Timestamp = f64;
/// Identifier for the corpus source that produced a record.
/// Examples: `arxiv_cs`, `fixture`
pub type SourceId = String;
/// Normalized free text carried in an event content channel.
/// Example: `hierarchical dirichlet processes topic models`
pub type ChannelText = String;
