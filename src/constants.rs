/// Constants used by the text normalizer's fixed character policy.
pub mod normalizer {
    /// Punctuation and control characters removed outright before tokenizing.
    pub const STRIPPED_CHARS: &[char] = &['{', '}', '(', ')', '=', ';', ',', '?'];
    /// Characters replaced with a space so they act as token boundaries.
    pub const BOUNDARY_CHARS: &[char] = &[':', '.'];
    /// Tokens shorter than this survive neither titles nor abstracts.
    pub const MIN_TOKEN_LEN: usize = 2;
}

/// Constants used by the citation-author heuristic rules.
pub mod citation {
    /// Marker that truncates an author string ("J. Doe et al." keeps "J. Doe").
    pub const ET_AL_MARKER: &str = "et al.";
    /// Substring indicating a mis-parsed title field; the entry is dropped.
    pub const TITLE_MARKER: &str = "title";
    /// Brace truncation only fires on strings with more parts than this.
    pub const BRACE_MAX_PARTS: usize = 3;
    /// Separator joining name parts into a canonical token.
    pub const TOKEN_SEPARATOR: &str = "#";
    /// Minimum trimmed length for a citation-author entry to be kept.
    pub const MIN_AUTHOR_LEN: usize = 2;
}

/// Constants shared by event content channels.
pub mod modality {
    /// Content key carrying document text (title or abstract).
    pub const MODALITY_DOCS: &str = "docs";
    /// Content key carrying concatenated citation-author tokens.
    pub const MODALITY_AUTHS: &str = "auths";
}

/// Constants used by the temporal mapper and configuration defaults.
pub mod timeline {
    /// Calendar-date pattern accepted for publication dates.
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
    /// Default epoch: the earliest publication date in the reference corpus.
    pub const DEFAULT_EPOCH: &str = "1996-06-03";
    /// Default base for densely-assigned author ids.
    pub const DEFAULT_ID_BASE: usize = 0;
}
