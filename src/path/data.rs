//! Shared path representation and atom/name algebra.
//!
//! Every path variant holds the same three fields: the atom sequence, the
//! trailing-separator flag, and an optional drive. `PathData` carries those
//! fields and implements the operation algebra once; the typed variants in
//! `relative.rs` and `absolute.rs` wrap it and re-run their own structural
//! checks after each operation. Drive-anchored behavior is the composed
//! `drive` field, not a separate type.
//!
//! All operations are pure: they read `&self` and build a new value.

use crate::atom::{self, Atom, EXTENSION_SEPARATOR};
use crate::drive::Drive;
use crate::error::{Error, Result};
use crate::path::normalize::normalize_atoms;

/// The fields shared by every path variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct PathData {
    atoms: Vec<Atom>,
    trailing_separator: bool,
    drive: Option<Drive>,
}

impl PathData {
    pub(crate) fn new(atoms: Vec<Atom>, trailing_separator: bool, drive: Option<Drive>) -> Self {
        Self {
            atoms,
            trailing_separator,
            drive,
        }
    }

    /// Validate raw segments into atoms and build the data.
    pub(crate) fn from_raw<I, S>(
        atoms: I,
        trailing_separator: bool,
        drive: Option<Drive>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let atoms = atom::validate_atoms(atoms)?;
        Ok(Self::new(atoms, trailing_separator, drive))
    }

    pub(crate) fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub(crate) fn has_trailing_separator(&self) -> bool {
        self.trailing_separator
    }

    pub(crate) fn drive(&self) -> Option<Drive> {
        self.drive
    }

    pub(crate) fn with_trailing_separator(&self, trailing_separator: bool) -> Self {
        Self {
            atoms: self.atoms.clone(),
            trailing_separator,
            drive: self.drive,
        }
    }

    pub(crate) fn with_drive(&self, drive: Option<Drive>) -> Self {
        Self {
            atoms: self.atoms.clone(),
            trailing_separator: self.trailing_separator,
            drive,
        }
    }

    // Indexed access ------------------------------------------------------

    pub(crate) fn atom_at(&self, index: isize) -> Result<&Atom> {
        self.get_atom(index).ok_or(Error::UndefinedAtomIndex {
            index,
            len: self.atoms.len(),
        })
    }

    pub(crate) fn get_atom(&self, index: isize) -> Option<&Atom> {
        resolve_index(self.atoms.len(), index).map(|i| &self.atoms[i])
    }

    pub(crate) fn slice_atoms(&self, start: isize, length: Option<isize>) -> Vec<Atom> {
        let (from, to) = slice_range(self.atoms.len(), start, length);
        self.atoms[from..to].to_vec()
    }

    // Name views ----------------------------------------------------------

    /// The last atom, or the empty string for a zero-atom path.
    pub(crate) fn name(&self) -> &str {
        self.atoms.last().map_or("", Atom::as_str)
    }

    /// The name split on the extension separator, empty segments dropped.
    pub(crate) fn name_atoms(&self) -> Vec<String> {
        self.name()
            .split(EXTENSION_SEPARATOR)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub(crate) fn name_atom_at(&self, index: isize) -> Result<String> {
        let name_atoms = self.name_atoms();
        let len = name_atoms.len();
        resolve_index(len, index)
            .map(|i| name_atoms[i].clone())
            .ok_or(Error::UndefinedAtomIndex { index, len })
    }

    pub(crate) fn get_name_atom(&self, index: isize) -> Option<String> {
        let name_atoms = self.name_atoms();
        resolve_index(name_atoms.len(), index).map(|i| name_atoms[i].clone())
    }

    pub(crate) fn slice_name_atoms(&self, start: isize, length: Option<isize>) -> Vec<String> {
        let name_atoms = self.name_atoms();
        let (from, to) = slice_range(name_atoms.len(), start, length);
        name_atoms[from..to].to_vec()
    }

    /// Extension boundary rule: a name with a single dot-delimited segment
    /// has no extension, unless the name leads with the extension
    /// separator, in which case that segment is the sole extension.
    pub(crate) fn extension(&self) -> Option<String> {
        let name_atoms = self.name_atoms();
        match name_atoms.len() {
            0 => None,
            1 if self.name().starts_with(EXTENSION_SEPARATOR) => Some(name_atoms[0].clone()),
            1 => None,
            _ => name_atoms.last().cloned(),
        }
    }

    pub(crate) fn has_extension(&self) -> bool {
        self.extension().is_some()
    }

    pub(crate) fn name_suffix(&self) -> Option<String> {
        let name_atoms = self.name_atoms();
        if self.name().starts_with(EXTENSION_SEPARATOR) && !name_atoms.is_empty() {
            return Some(name_atoms.join(&EXTENSION_SEPARATOR.to_string()));
        }
        if name_atoms.len() > 1 {
            return Some(name_atoms[1..].join(&EXTENSION_SEPARATOR.to_string()));
        }
        None
    }

    pub(crate) fn name_prefix(&self) -> String {
        if self.name().starts_with(EXTENSION_SEPARATOR) {
            return String::new();
        }
        self.name_atoms().first().cloned().unwrap_or_default()
    }

    pub(crate) fn name_without_extension(&self) -> String {
        match self.name().rfind(EXTENSION_SEPARATOR) {
            Some(pos) if self.has_extension() => self.name()[..pos].to_string(),
            _ => self.name().to_string(),
        }
    }

    // Atom-producing operations -------------------------------------------

    // Joining atoms extends the path past its old tail, so the stale
    // trailing flag is cleared; `join` re-applies the joined path's flag.

    pub(crate) fn join_raw<I, S>(&self, new_atoms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let joined = atom::validate_atoms(new_atoms)?;
        let mut atoms = self.atoms.clone();
        atoms.extend(joined);
        Ok(Self::new(atoms, false, self.drive))
    }

    pub(crate) fn join_atoms(&self, new_atoms: &[Atom]) -> Self {
        let mut atoms = self.atoms.clone();
        atoms.extend_from_slice(new_atoms);
        Self::new(atoms, false, self.drive)
    }

    /// Pop up to `levels` trailing atoms; the caller decides what happens
    /// with any levels left over (relative paths append parent atoms,
    /// absolute paths fail).
    pub(crate) fn parent(&self, levels: usize) -> (Self, usize) {
        let kept = self.atoms.len().saturating_sub(levels);
        let remaining = levels.saturating_sub(self.atoms.len());
        let data = Self::new(self.atoms[..kept].to_vec(), false, self.drive);
        (data, remaining)
    }

    /// Splice `replacement` over the atom range starting at `index`.
    ///
    /// Out-of-range start indexes clamp to the sequence end, so the
    /// replacement may extend the path past its previous length.
    pub(crate) fn replace<I, S>(
        &self,
        index: isize,
        replacement: I,
        length: Option<isize>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let replacement = atom::validate_atoms(replacement)?;
        let (from, to) = slice_range(self.atoms.len(), index, length);
        let mut atoms = self.atoms.clone();
        atoms.splice(from..to, replacement);
        Ok(Self::new(atoms, self.trailing_separator, self.drive))
    }

    /// Replace the last atom with `name` (appending when there are no
    /// atoms). The new name is re-validated.
    pub(crate) fn replace_name(&self, name: &str) -> Result<Self> {
        let name = Atom::new(name).map_err(Error::from)?;
        let mut atoms = self.atoms.clone();
        atoms.pop();
        atoms.push(name);
        Ok(Self::new(atoms, self.trailing_separator, self.drive))
    }

    pub(crate) fn replace_name_without_extension(&self, base: &str) -> Result<Self> {
        match self.extension() {
            Some(extension) => self.replace_name(&format!("{base}{EXTENSION_SEPARATOR}{extension}")),
            None => self.replace_name(base),
        }
    }

    pub(crate) fn replace_name_prefix(&self, prefix: &str) -> Result<Self> {
        let name = self.name();
        let new_name = if name.starts_with(EXTENSION_SEPARATOR) {
            format!("{prefix}{name}")
        } else if let Some(pos) = name.find(EXTENSION_SEPARATOR) {
            format!("{prefix}{}", &name[pos..])
        } else {
            prefix.to_string()
        };
        self.replace_name(&new_name)
    }

    pub(crate) fn replace_name_suffix(&self, suffix: &str) -> Result<Self> {
        let suffix = suffix
            .strip_prefix(EXTENSION_SEPARATOR)
            .unwrap_or(suffix);
        let name = self.name();
        let keep = match name.find(EXTENSION_SEPARATOR) {
            Some(pos) => &name[..pos],
            None => name,
        };
        self.replace_name(&format!("{keep}{EXTENSION_SEPARATOR}{suffix}"))
    }

    pub(crate) fn replace_extension(&self, extension: &str) -> Result<Self> {
        let extension = extension
            .strip_prefix(EXTENSION_SEPARATOR)
            .unwrap_or(extension);
        let name = self.name();
        let keep = match name.rfind(EXTENSION_SEPARATOR) {
            Some(pos) => &name[..pos],
            None => name,
        };
        self.replace_name(&format!("{keep}{EXTENSION_SEPARATOR}{extension}"))
    }

    pub(crate) fn replace_name_atoms<I, S>(
        &self,
        index: isize,
        replacement: I,
        length: Option<isize>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut name_atoms = self.name_atoms();
        let (from, to) = slice_range(name_atoms.len(), index, length);
        name_atoms.splice(from..to, replacement.into_iter().map(Into::into));
        self.replace_name(&name_atoms.join(&EXTENSION_SEPARATOR.to_string()))
    }

    pub(crate) fn join_extensions<I, S>(&self, extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut name_atoms = self.name_atoms();
        name_atoms.extend(extensions.into_iter().map(Into::into));
        self.replace_name(&name_atoms.join(&EXTENSION_SEPARATOR.to_string()))
    }

    pub(crate) fn suffix_name(&self, suffix: &str) -> Result<Self> {
        self.replace_name(&format!("{}{suffix}", self.name()))
    }

    pub(crate) fn prefix_name(&self, prefix: &str) -> Result<Self> {
        self.replace_name(&format!("{prefix}{}", self.name()))
    }

    /// Strip the last extension. A path without an extension is returned
    /// unchanged.
    pub(crate) fn strip_extension(&self) -> Result<Self> {
        if !self.has_extension() {
            return Ok(self.clone());
        }
        match self.name().rfind(EXTENSION_SEPARATOR) {
            Some(pos) => {
                let keep = self.name()[..pos].to_string();
                self.replace_name(&keep)
            }
            None => Ok(self.clone()),
        }
    }

    /// Strip every extension. A path without an extension is returned
    /// unchanged.
    pub(crate) fn strip_name_suffix(&self) -> Result<Self> {
        if !self.has_extension() {
            return Ok(self.clone());
        }
        match self.name().find(EXTENSION_SEPARATOR) {
            Some(pos) => {
                let keep = self.name()[..pos].to_string();
                self.replace_name(&keep)
            }
            None => Ok(self.clone()),
        }
    }

    pub(crate) fn normalized(&self) -> Self {
        Self::new(
            normalize_atoms(&self.atoms),
            self.trailing_separator,
            self.drive,
        )
    }

    // Formatting -----------------------------------------------------------

    /// Render the path with the given separator.
    ///
    /// A zero-atom absolute path renders as a single separator regardless
    /// of the trailing flag.
    pub(crate) fn format(&self, separator: char, absolute: bool) -> String {
        let mut out = String::new();
        if let Some(drive) = self.drive {
            out.push(drive.letter());
            out.push(':');
        }
        if absolute {
            out.push(separator);
            if self.atoms.is_empty() {
                return out;
            }
        }
        let separator_str = separator.to_string();
        let mut first = true;
        for atom in &self.atoms {
            if !first {
                out.push_str(&separator_str);
            }
            out.push_str(atom.as_str());
            first = false;
        }
        if self.trailing_separator {
            out.push(separator);
        }
        out
    }
}

/// Resolve a possibly-negative index against a sequence length.
fn resolve_index(len: usize, index: isize) -> Option<usize> {
    let resolved = if index < 0 {
        isize::try_from(len).ok()? + index
    } else {
        index
    };
    usize::try_from(resolved)
        .ok()
        .filter(|&i| i < len)
}

/// Compute the `[from, to)` range selected by a start index and optional
/// length, with negative values counting from the end of the sequence.
fn slice_range(len: usize, start: isize, length: Option<isize>) -> (usize, usize) {
    let len_i = isize::try_from(len).unwrap_or(isize::MAX);
    let from = if start < 0 {
        (len_i + start).max(0)
    } else {
        start.min(len_i)
    };
    #[allow(clippy::cast_sign_loss)]
    let from = from as usize;
    let to = match length {
        None => len,
        Some(l) if l >= 0 => from.saturating_add(l.unsigned_abs()).min(len),
        Some(l) => {
            let end = len_i + l;
            if end <= isize::try_from(from).unwrap_or(isize::MAX) {
                from
            } else {
                #[allow(clippy::cast_sign_loss)]
                {
                    end as usize
                }
            }
        }
    };
    (from, to)
}

/// Canonicalize separator characters in a needle or pattern so either
/// separator style matches against the `/`-formatted path string.
pub(crate) fn normalize_search_input(input: &str) -> String {
    input.replace('\\', "/")
}

/// Locale-agnostic lower-casing used by case-insensitive predicates.
pub(crate) fn fold_case(input: &str) -> String {
    input.to_lowercase()
}
