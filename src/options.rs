/// A modifier for a single call, e.g. "treat these error codes as success".
///
/// Options are created through the `with_*` functions and passed as the
/// trailing `opts` slice of any operation; their effects accumulate in the
/// order they're given.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum CallOption {
    IgnoredCodes(Vec<u32>),
}

/// Treats given remote error codes as non-fatal for this call.
///
/// Can be passed multiple times; codes accumulate in order, duplicates
/// included.
pub fn with_ignored_codes(codes: impl IntoIterator<Item = u32>) -> CallOption {
    CallOption::IgnoredCodes(codes.into_iter().collect())
}

/// Configuration of a single call, built from its [`CallOption`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallOptions {
    ignored_codes: Vec<u32>,
}

impl CallOptions {
    pub fn build<'a>(opts: impl IntoIterator<Item = &'a CallOption>) -> Self {
        let mut this = Self::default();

        for opt in opts {
            this.apply(Some(opt));
        }

        this
    }

    /// Applies given option on top of this configuration; `None` is a no-op.
    pub fn apply(&mut self, opt: Option<&CallOption>) {
        match opt {
            Some(CallOption::IgnoredCodes(codes)) => {
                self.ignored_codes.extend_from_slice(codes);
            }

            None => {}
        }
    }

    pub fn ignored_codes(&self) -> &[u32] {
        &self.ignored_codes
    }

    /// Converts this configuration into the ignored-code groups expected by
    /// [`LegacyClient`](crate::LegacyClient).
    ///
    /// When no codes were set, the argument is omitted altogether (an empty
    /// slice), so that the flat client falls back to its own defaults.
    pub fn into_legacy_ignored(self) -> Vec<Vec<u32>> {
        if self.ignored_codes.is_empty() {
            Vec::new()
        } else {
            vec![self.ignored_codes]
        }
    }
}

pub fn to_legacy_ignored(opts: &[CallOption]) -> Vec<Vec<u32>> {
    CallOptions::build(opts).into_legacy_ignored()
}
