//! Atom-sequence normalization.
//!
//! Normalization resolves the special atoms left in a path after parsing:
//! `.` atoms are dropped, and `..` atoms cancel the atom before them when
//! one is available. Leading `..` atoms that cannot cancel anything are
//! preserved in order; relative paths legitimately keep them. Whether a
//! leading `..` is *allowed* is the absolute path constructor's concern,
//! not the normalizer's.

use crate::atom::Atom;

/// Normalize a sequence of atoms.
///
/// Scans left to right: `.` atoms are dropped unconditionally; a `..`
/// atom cancels the previous output atom unless the output is empty or
/// already ends with an unresolvable `..`; everything else is appended
/// verbatim. The operation is idempotent.
///
/// # Examples
///
/// ```
/// use purepath::normalize::normalize_atoms;
/// use purepath::Atom;
///
/// let atoms = vec![
///     Atom::new("foo").unwrap(),
///     Atom::parent(),
///     Atom::new("bar").unwrap(),
/// ];
/// let normalized = normalize_atoms(&atoms);
/// assert_eq!(normalized, vec![Atom::new("bar").unwrap()]);
/// ```
#[must_use]
pub fn normalize_atoms(atoms: &[Atom]) -> Vec<Atom> {
    let mut output: Vec<Atom> = Vec::with_capacity(atoms.len());

    for atom in atoms {
        if atom.is_self() {
            continue;
        }
        if atom.is_parent() {
            match output.last() {
                Some(last) if !last.is_parent() => {
                    output.pop();
                }
                _ => output.push(atom.clone()),
            }
            continue;
        }
        output.push(atom.clone());
    }

    output
}

/// Whether a sequence of atoms is already in normalized form.
///
/// True when the sequence contains no `.` atoms and every `..` atom sits
/// in the unresolvable leading run.
#[must_use]
pub fn is_normalized(atoms: &[Atom]) -> bool {
    let mut leading_parents = true;
    for atom in atoms {
        if atom.is_self() {
            return false;
        }
        if atom.is_parent() {
            if !leading_parents {
                return false;
            }
        } else {
            leading_parents = false;
        }
    }
    true
}
