//! String-form serialization for path values.
//!
//! Paths serialize as their canonical `/`-formatted string and
//! deserialize by parsing it back. Deserialization recognizes a windows
//! drive prefix so drive-anchored values round-trip; consequently a
//! relative path whose first atom is a single letter followed by `:`
//! deserializes as drive-anchored. The `anchored` flag of a relative path
//! is not part of the serialized form.

use serde::de::{Error as DeError, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::factory;
use crate::parser::{ParseOptions, Parser};
use crate::path::absolute::AbsolutePath;
use crate::path::any::Path;
use crate::path::relative::RelativePath;

fn parse_with_drive_recognition(raw: &str) -> Result<Path> {
    let options = ParseOptions::default().with_parse_windows_drive(true);
    let result = Parser::new().parse(raw, &options);
    factory::build(result)
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_with_drive_recognition(&raw)
            .map_err(|err| DeError::invalid_value(Unexpected::Str(&raw), &err.to_string().as_str()))
    }
}

impl Serialize for RelativePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RelativePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_with_drive_recognition(&raw)
            .and_then(Path::into_relative)
            .map_err(|err| DeError::invalid_value(Unexpected::Str(&raw), &err.to_string().as_str()))
    }
}

impl Serialize for AbsolutePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AbsolutePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_with_drive_recognition(&raw)
            .and_then(Path::into_absolute)
            .map_err(|err| DeError::invalid_value(Unexpected::Str(&raw), &err.to_string().as_str()))
    }
}
