use serde::{Deserialize, Serialize};

use crate::codec::{CodecError, ReplacementStyle, Result, SanitizeOptions};


/// Default nesting ceiling for reading, decoding, and encoding.
pub const DEFAULT_MAX_DEPTH: u32 = 128;

/// Largest magnitude a double-class integral value may have and still be written as an integer literal.
pub const INTEGER_LITERAL_LIMIT: f64 = 999_999.0;

/// One positional option argument, as passed in name/value pairs.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionArg {
	/// Character data (option names, text values).
	Text(String),
	/// Logical scalar.
	Bool(bool),
	/// Numeric scalar.
	Number(f64),
}

impl OptionArg {
	fn type_label(&self) -> &'static str {
		match self {
			Self::Text(_) => "text",
			Self::Bool(_) => "logical",
			Self::Number(_) => "numeric",
		}
	}
}

impl From<&str> for OptionArg {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}

impl From<bool> for OptionArg {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<f64> for OptionArg {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

/// Runtime limits and behavior switches for decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default, deny_unknown_fields)]
pub struct DecodeOptions {
	/// Maximum container nesting depth for reading and decoding.
	pub max_depth: u32,
	/// Pass object keys through the identifier sanitizer; when false keys are used verbatim.
	pub make_valid_name: bool,
	/// Options forwarded to the identifier sanitizer.
	pub sanitize: SanitizeOptions,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
			make_valid_name: true,
			sanitize: SanitizeOptions::default(),
		}
	}
}

impl DecodeOptions {
	/// Preset that keeps object keys exactly as written.
	pub fn verbatim_keys() -> Self {
		Self {
			make_valid_name: false,
			..Self::default()
		}
	}

	/// Build options from name/value pairs (`ReplacementStyle`, `Prefix`, `makeValidName`).
	pub fn from_args(args: &[OptionArg]) -> Result<Self> {
		let mut options = Self::default();
		for (name, value) in option_pairs(args)? {
			match name.to_ascii_lowercase().as_str() {
				"replacementstyle" => options.sanitize.replacement_style = text_value(&name, value)?.parse()?,
				"prefix" => options.sanitize.prefix = text_value(&name, value)?.to_owned(),
				"makevalidname" => options.make_valid_name = bool_value(&name, value)?,
				_ => {
					return Err(CodecError::invalid_arguments(format!(
						"unknown decode option '{name}' (valid options are 'ReplacementStyle', 'Prefix' and 'makeValidName')"
					)));
				}
			}
		}
		Ok(options)
	}
}

/// Runtime limits and behavior switches for encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default, deny_unknown_fields)]
pub struct EncodeOptions {
	/// Write NaN and infinite values as `null`; otherwise as `NaN`/`Infinity`/`-Infinity` literals.
	#[serde(rename = "ConvertInfAndNaN")]
	pub convert_inf_and_nan: bool,
	/// Indent output with four spaces per level.
	#[serde(alias = "PrettyPrint")]
	pub pretty_writer: bool,
	/// Magnitude bound for writing double-class integral values as integer literals.
	pub integer_literal_limit: f64,
	/// Maximum value nesting depth.
	pub max_depth: u32,
}

impl Default for EncodeOptions {
	fn default() -> Self {
		Self {
			convert_inf_and_nan: true,
			pretty_writer: false,
			integer_literal_limit: INTEGER_LITERAL_LIMIT,
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}
}

impl EncodeOptions {
	/// Preset with indented output.
	pub fn pretty() -> Self {
		Self {
			pretty_writer: true,
			..Self::default()
		}
	}

	/// Preset writing non-finite values as `NaN`/`Infinity` literals instead of `null`.
	pub fn non_finite_literals() -> Self {
		Self {
			convert_inf_and_nan: false,
			..Self::default()
		}
	}

	/// Build options from name/value pairs (`ConvertInfAndNaN`, `PrettyWriter`).
	pub fn from_args(args: &[OptionArg]) -> Result<Self> {
		let mut options = Self::default();
		for (name, value) in option_pairs(args)? {
			match name.to_ascii_lowercase().as_str() {
				"convertinfandnan" => options.convert_inf_and_nan = bool_value(&name, value)?,
				"prettywriter" | "prettyprint" => options.pretty_writer = bool_value(&name, value)?,
				_ => {
					return Err(CodecError::invalid_arguments(format!(
						"unknown encode option '{name}' (valid options are 'ConvertInfAndNaN' and 'PrettyWriter')"
					)));
				}
			}
		}
		Ok(options)
	}
}

fn option_pairs(args: &[OptionArg]) -> Result<Vec<(String, &OptionArg)>> {
	if args.len() % 2 != 0 {
		return Err(CodecError::invalid_arguments(format!(
			"options must be given as name/value pairs, got {} arguments",
			args.len()
		)));
	}

	args.chunks_exact(2)
		.map(|pair| match &pair[0] {
			OptionArg::Text(name) => Ok((name.clone(), &pair[1])),
			other => Err(CodecError::invalid_arguments(format!(
				"option names must be text, got {}",
				other.type_label()
			))),
		})
		.collect()
}

fn bool_value(name: &str, value: &OptionArg) -> Result<bool> {
	match value {
		OptionArg::Bool(value) => Ok(*value),
		other => Err(CodecError::invalid_arguments(format!(
			"value for option '{name}' must be a logical scalar, got {}",
			other.type_label()
		))),
	}
}

fn text_value<'a>(name: &str, value: &'a OptionArg) -> Result<&'a str> {
	match value {
		OptionArg::Text(value) => Ok(value),
		other => Err(CodecError::invalid_arguments(format!(
			"value for option '{name}' must be text, got {}",
			other.type_label()
		))),
	}
}
