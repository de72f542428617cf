//! Directory sorter.
//!
//! Moves every file under a directory into a category folder chosen by its
//! extension, normalising file names on the way, and removes the folders
//! that end up empty.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{AssistantError, HandlerError, HandlerResult};

/// Category folder names with the extensions they collect.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    ("images", &["jpeg", "jpg", "png", "svg", "gif", "bmp", "webp"]),
    ("video", &["avi", "mp4", "mov", "mkv"]),
    (
        "documents",
        &["doc", "docx", "txt", "pdf", "xls", "xlsx", "ppt", "pptx", "odt", "rtf", "md", "csv"],
    ),
    ("audio", &["mp3", "ogg", "wav", "amr", "flac"]),
    ("archives", &["zip", "gz", "tar", "rar", "7z"]),
];

/// Folder for files whose extension is not listed in [`CATEGORIES`].
pub const OTHERS: &str = "others";

/// What a sorting run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortReport {
    /// Files moved per category folder.
    pub moved: BTreeMap<String, usize>,
    pub known_extensions: BTreeSet<String>,
    pub unknown_extensions: BTreeSet<String>,
    pub removed_dirs: usize,
}

impl SortReport {
    pub fn total(&self) -> usize {
        self.moved.values().sum()
    }
}

/// Category folder for an extension (lowercase, without the dot).
pub fn category_for(extension: &str) -> Option<&'static str> {
    let extension = extension.to_lowercase();
    CATEGORIES
        .iter()
        .find(|(_, exts)| exts.contains(&extension.as_str()))
        .map(|(name, _)| *name)
}

fn transliterate(c: char) -> Option<&'static str> {
    let latin = match c.to_lowercase().next().unwrap_or(c) {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "h",
        'ґ' => "g",
        'д' => "d",
        'е' => "e",
        'є' => "ie",
        'ё' => "io",
        'ж' => "zh",
        'з' => "z",
        'и' => "y",
        'і' => "i",
        'ї' => "i",
        'й' => "i",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "iu",
        'я' => "ia",
        _ => return None,
    };
    Some(latin)
}

/// Transliterates Cyrillic to Latin and replaces anything that is not an
/// ASCII letter or digit with `_`. Case of Latin letters is kept.
pub fn normalize(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    for c in stem.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if let Some(latin) = transliterate(c) {
            if c.is_uppercase() {
                let mut chars = latin.chars();
                if let Some(first) = chars.next() {
                    out.push(first.to_ascii_uppercase());
                    out.push_str(chars.as_str());
                }
            } else {
                out.push_str(latin);
            }
        } else {
            out.push('_');
        }
    }
    out
}

fn io_error(action: &str, path: &Path, e: impl std::fmt::Display) -> HandlerError {
    AssistantError::io(format!("Failed to {action} {}: {e}", path.display())).into()
}

/// Picks `dir/stem.ext`, or `dir/stem_N.ext` if that is taken.
fn free_target(dir: &Path, stem: &str, extension: Option<&str>) -> PathBuf {
    let file_name = |suffix: Option<usize>| {
        let stem = match suffix {
            Some(n) => format!("{stem}_{n}"),
            None => stem.to_string(),
        };
        match extension {
            Some(ext) => format!("{stem}.{ext}"),
            None => stem,
        }
    };

    let mut candidate = dir.join(file_name(None));
    let mut n = 1;
    while candidate.exists() {
        candidate = dir.join(file_name(Some(n)));
        n += 1;
    }
    candidate
}

/// Sorts the directory at `root` in place.
pub fn sort_directory(root: &Path) -> HandlerResult<SortReport> {
    if !root.exists() {
        return Err(HandlerError::not_found(format!("'{}'", root.display())));
    }
    if !root.is_dir() {
        return Err(HandlerError::invalid_value(format!(
            "'{}' is not a directory",
            root.display()
        )));
    }

    let category_dirs: BTreeSet<PathBuf> = CATEGORIES
        .iter()
        .map(|(name, _)| root.join(name))
        .chain(std::iter::once(root.join(OTHERS)))
        .collect();

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| !category_dirs.contains(entry.path()));
    for entry in walker {
        let entry = entry.map_err(|e| io_error("read", root, e))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    let mut report = SortReport::default();
    for file in files {
        let stem = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = file
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase());

        let category = match extension.as_deref() {
            Some(ext) => match category_for(ext) {
                Some(category) => {
                    report.known_extensions.insert(ext.to_string());
                    category
                }
                None => {
                    report.unknown_extensions.insert(ext.to_string());
                    OTHERS
                }
            },
            None => OTHERS,
        };

        let target_dir = root.join(category);
        fs::create_dir_all(&target_dir).map_err(|e| io_error("create", &target_dir, e))?;
        let target = free_target(&target_dir, &normalize(&stem), extension.as_deref());

        debug!("Moving {} -> {}", file.display(), target.display());
        fs::rename(&file, &target).map_err(|e| io_error("move", &file, e))?;
        *report.moved.entry(category.to_string()).or_default() += 1;
    }

    report.removed_dirs = remove_empty_dirs(root, &category_dirs)?;
    info!(
        "Sorted {} file(s) in {}, removed {} empty folder(s)",
        report.total(),
        root.display(),
        report.removed_dirs
    );
    Ok(report)
}

fn remove_empty_dirs(root: &Path, keep: &BTreeSet<PathBuf>) -> HandlerResult<usize> {
    let mut removed = 0;
    // contents_first yields children before their parent directory.
    for entry in WalkDir::new(root).min_depth(1).contents_first(true) {
        let entry = entry.map_err(|e| io_error("read", root, e))?;
        let path = entry.path();
        if !entry.file_type().is_dir() || keep.contains(path) {
            continue;
        }
        let is_empty = fs::read_dir(path)
            .map_err(|e| io_error("read", path, e))?
            .next()
            .is_none();
        if is_empty {
            fs::remove_dir(path).map_err(|e| io_error("remove", path, e))?;
            removed += 1;
        }
    }
    Ok(removed)
}
