use crate::codec::{Dictionary, IdentifierSanitizer, MakeValidName, Record, Result, SanitizeOptions};

/// Converts a dictionary into the record the encoder writes as a JSON object.
pub trait DictionaryAccessor {
	/// Field list of the object to emit for `dictionary`, in output order.
	fn to_record(&self, dictionary: &Dictionary) -> Result<Record>;
}

/// Accessor that sanitizes each key and keeps entry order.
///
/// Keys that sanitize to the same name collapse into one field; the later entry's value wins.
#[derive(Debug, Clone, Default)]
pub struct EntriesAccessor<S = MakeValidName> {
	sanitizer: S,
	options: SanitizeOptions,
}

impl EntriesAccessor {
	/// Accessor using [`MakeValidName`] with default options.
	pub fn new() -> Self {
		Self::default()
	}
}

impl<S: IdentifierSanitizer> EntriesAccessor<S> {
	/// Accessor using a custom sanitizer and options.
	pub fn with_sanitizer(sanitizer: S, options: SanitizeOptions) -> Self {
		Self { sanitizer, options }
	}
}

impl<S: IdentifierSanitizer> DictionaryAccessor for EntriesAccessor<S> {
	fn to_record(&self, dictionary: &Dictionary) -> Result<Record> {
		let mut record = Record::new();
		for (key, value) in dictionary.entries() {
			record.insert(self.sanitizer.sanitize(key, &self.options), value.clone());
		}
		Ok(record)
	}
}
