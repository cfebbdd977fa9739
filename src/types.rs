use anyhow::{Context, Result};

/// Naming convention of the sequencing reads being filtered.
///
/// The read type selects how a raw read name collapses to the canonical
/// name used to join alignment records against the input reads, and
/// whether the CCS np/rq quality gate applies.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadType {
    /// PacBio subreads; names carry a trailing /start_end subread suffix
    #[value(name = "CLR")]
    Clr,
    /// SRA-style names; anything after the first space is a comment
    #[value(name = "SRA")]
    Sra,
    /// PacBio HiFi; names may carry np= / rq= tokens after the identifier
    #[value(name = "CCS")]
    Ccs,
}

impl ReadType {
    /// Collapse a raw read name to the canonical join key.
    ///
    /// For CLR every subread of one physical read maps to the same key;
    /// a CLR name without any `/` collapses to the empty string.
    pub fn canonical_name<'a>(&self, raw_name: &'a str) -> &'a str {
        match self {
            ReadType::Clr => match raw_name.rfind('/') {
                Some(idx) => &raw_name[..idx],
                None => "",
            },
            ReadType::Sra => match raw_name.find(' ') {
                Some(idx) => &raw_name[..idx],
                None => raw_name,
            },
            ReadType::Ccs => match raw_name.find(' ') {
                Some(idx) => &raw_name[..idx],
                None => raw_name,
            },
        }
    }

    /// Apply the CCS quality gate to a raw read name.
    ///
    /// CCS names may carry `np=<int>` as their second space-delimited
    /// field and `rq=<float>` as their third. A token that is present and
    /// below its threshold rejects the read; a missing token never does.
    /// CLR and SRA reads always pass.
    pub fn passes_quality_filters(
        &self,
        raw_name: &str,
        min_passes: u32,
        min_read_quality: f64,
    ) -> Result<bool> {
        if *self != ReadType::Ccs {
            return Ok(true);
        }

        let fields: Vec<&str> = raw_name.split(' ').collect();
        if let Some(token) = fields.get(1).and_then(|f| f.strip_prefix("np=")) {
            let passes: u32 = token
                .parse()
                .with_context(|| format!("bad np= token in read name '{}'", raw_name))?;
            if passes < min_passes {
                return Ok(false);
            }
        }
        if let Some(token) = fields.get(2).and_then(|f| f.strip_prefix("rq=")) {
            let quality: f64 = token
                .parse()
                .with_context(|| format!("bad rq= token in read name '{}'", raw_name))?;
            if quality < min_read_quality {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
