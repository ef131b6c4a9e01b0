use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use flate2::read::MultiGzDecoder;

use crate::errors::{Result, RoiCoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum FileType {
    GFF,
    GFF3,
    GTF,
    BEDGRAPH,
    WIG,
    UNKNOWN, // anything we can't read
}

impl FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gff" | "gff2" => Ok(FileType::GFF),
            "gff3" => Ok(FileType::GFF3),
            "gtf" => Ok(FileType::GTF),
            "bedgraph" | "bdg" | "bg" => Ok(FileType::BEDGRAPH),
            "wig" => Ok(FileType::WIG),
            _ => Ok(FileType::UNKNOWN),
        }
    }
}

impl FileType {
    /// True for the GFF family we read regions from.
    pub fn is_region_file(&self) -> bool {
        matches!(self, FileType::GFF | FileType::GFF3 | FileType::GTF)
    }

    /// True for the tracks we read score intervals from.
    pub fn is_score_file(&self) -> bool {
        matches!(self, FileType::BEDGRAPH | FileType::WIG)
    }
}

pub struct FileInfo {
    pub file_type: FileType,
    pub is_gzipped: bool,
}

///
/// Work out the file type from the suffix, looking through a trailing `.gz`.
///
pub fn get_file_info(path: &Path) -> FileInfo {
    let mut file_type = FileType::UNKNOWN;
    let mut is_gzipped = false;

    if let Some(filename) = path.file_name().and_then(OsStr::to_str) {
        let base_filename = match filename.strip_suffix(".gz") {
            Some(base) => {
                is_gzipped = true;
                base
            }
            None => filename,
        };

        if let Some(ext) = Path::new(base_filename).extension().and_then(OsStr::to_str) {
            file_type = FileType::from_str(ext).unwrap_or(FileType::UNKNOWN);
        }
    }

    FileInfo {
        file_type,
        is_gzipped,
    }
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> std::io::Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Build the name of a derived output file next to the input: `<stem>_<tag>.<ext>`.
///
/// A trailing `.gz` on the input is dropped, so `promoters.gff.gz` with tag
/// `scored` becomes `promoters_scored.gff`.
///
pub fn scored_output_path<P: AsRef<Path>>(input: P, tag: &str) -> Result<PathBuf> {
    let input = input.as_ref();
    let invalid = || RoiCoreError::InvalidOutputPath(input.display().to_string());

    let filename = input.file_name().and_then(OsStr::to_str).ok_or_else(invalid)?;
    let base = filename.strip_suffix(".gz").unwrap_or(filename);
    let base = Path::new(base);

    let stem = base.file_stem().and_then(OsStr::to_str).ok_or_else(invalid)?;
    let new_name = match base.extension().and_then(OsStr::to_str) {
        Some(ext) => format!("{}_{}.{}", stem, tag, ext),
        None => format!("{}_{}", stem, tag),
    };

    Ok(input.with_file_name(new_name))
}
