use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use flate2::Compression;
use flate2::write::GzEncoder;

use roiscore_core::models::{Attributes, Region, Strand, parse_frame};
use roiscore_core::utils::{FileType, get_dynamic_reader, get_file_info};

use crate::error::{Result, RoiIoError, is_header_line, parse_field};

///
/// Check that a path names a GFF-family file (`.gff`, `.gff3`, `.gtf`, optionally
/// gzipped).
///
pub fn check_region_file(path: &Path) -> Result<FileType> {
    let info = get_file_info(path);
    match info.file_type.is_region_file() {
        true => Ok(info.file_type),
        false => Err(RoiIoError::UnsupportedRegionFile(path.display().to_string())),
    }
}

///
/// Read all regions from a GFF, GFF3 or GTF file (optionally gzipped).
///
/// Comment and directive lines are skipped and reading stops at a `##FASTA`
/// section. A `.` score reads as `0.0`; the attribute column is kept verbatim.
///
/// # Arguments
/// - path: path to the file on disk
pub fn read_gff<P: AsRef<Path>>(path: P) -> Result<Vec<Region>> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;

    let mut regions: Vec<Region> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;

        if line.starts_with("##FASTA") {
            break;
        }
        if line.trim().is_empty() || is_header_line(&line) {
            continue;
        }

        regions.push(parse_gff_line(&line, idx + 1)?);
    }

    if regions.is_empty() {
        return Err(RoiIoError::EmptyFile(path.display().to_string()));
    }

    Ok(regions)
}

fn parse_gff_line(line: &str, line_num: usize) -> Result<Region> {
    let parts: Vec<&str> = line.split('\t').collect();

    if parts.len() < 8 {
        return Err(RoiIoError::parse(
            line_num,
            format!(
                "expected at least 8 tab separated columns, found {}",
                parts.len()
            ),
        ));
    }

    let start: u32 = parse_field(parts[3], "start", line_num)?;
    let end: u32 = parse_field(parts[4], "end", line_num)?;
    Region::check_coordinates(start, end).map_err(|e| RoiIoError::parse(line_num, e.to_string()))?;

    let score = match parts[5] {
        "." => 0.0,
        score => parse_field(score, "score", line_num)?,
    };

    let strand = Strand::from_str(parts[6]).map_err(|e| RoiIoError::parse(line_num, e.to_string()))?;

    let frame = parse_frame(parts[7]).map_err(|e| RoiIoError::parse(line_num, e.to_string()))?;

    Ok(Region {
        chr: parts[0].to_owned(),
        source: parts[1].to_owned(),
        feature: parts[2].to_owned(),
        start,
        end,
        score,
        strand,
        frame,
        attributes: Attributes::from_text(parts[8..].join("\t")),
    })
}

pub trait GffWrite {
    ///
    /// Write data to disk as gff file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_gff<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;

    ///
    /// Write data to disk as gff.gz file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_gff_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;
}

impl GffWrite for [Region] {
    fn write_gff<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(File::create(path)?);

        for region in self {
            writeln!(file, "{}", region.as_string())?;
        }

        file.flush()
    }

    fn write_gff_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());

        for region in self {
            writeln!(encoder, "{}", region.as_string())?;
        }

        encoder.finish()?;
        Ok(())
    }
}
