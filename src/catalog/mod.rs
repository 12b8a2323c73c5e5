//! Static seed catalog and the extension registry built from it.
//!
//! A seed is a small reference file hosted at a stable URL with a known byte
//! size. Declared sizes allow exact planning before any download, and double
//! as the cache validity check. The registry groups seeds by extension and
//! assigns each extension the word-list family its file names are drawn
//! from.

use serde::Serialize;

/// A reference file used to populate many generated files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seed {
    /// Download location.
    pub url: String,
    /// File name, also the cache key.
    pub file_name: String,
    /// Extension including the leading dot (e.g. ".pdf").
    pub extension: String,
    /// Declared size in bytes; must match what the URL actually serves.
    pub size: u64,
}

impl Seed {
    pub fn new(url: &str, file_name: &str, extension: &str, size: u64) -> Self {
        Self {
            url: url.to_string(),
            file_name: file_name.to_string(),
            extension: extension.to_string(),
            size,
        }
    }
}

/// Word-list family a file extension draws its base names from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NameFamily {
    Document,
    Spreadsheet,
    Image,
    Sound,
    Slides,
}

/// Map an extension to its name family. Unknown extensions read like
/// documents.
pub fn family_for(extension: &str) -> NameFamily {
    match extension {
        ".doc" | ".docx" | ".pdf" | ".rtf" | ".odt" => NameFamily::Document,
        ".ppt" => NameFamily::Slides,
        ".xlsx" => NameFamily::Spreadsheet,
        ".jpg" | ".webp" => NameFamily::Image,
        ".mp3" | ".ogg" => NameFamily::Sound,
        _ => NameFamily::Document,
    }
}

/// One registered extension: its seed pool and name family.
#[derive(Debug, Clone)]
pub struct Entry {
    pub extension: String,
    pub family: NameFamily,
    pub seeds: Vec<Seed>,
}

/// All extensions available for planning, in stable first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    /// Registry over the built-in seed catalog.
    pub fn standard() -> Self {
        Self::from_seeds(seeds())
    }

    /// Group seeds by extension, preserving the order extensions first
    /// appear in.
    pub fn from_seeds(seeds: Vec<Seed>) -> Self {
        let mut entries: Vec<Entry> = Vec::new();
        for seed in seeds {
            match entries.iter_mut().find(|e| e.extension == seed.extension) {
                Some(entry) => entry.seeds.push(seed),
                None => entries.push(Entry {
                    extension: seed.extension.clone(),
                    family: family_for(&seed.extension),
                    seeds: vec![seed],
                }),
            }
        }
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Registered extensions in registration order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.extension.as_str())
    }

    pub fn entry(&self, extension: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.extension == extension)
    }
}

/// The built-in seed catalog. Sizes are exact so a plan's byte total is
/// known before the first download.
pub fn seeds() -> Vec<Seed> {
    const BASE: &str = "https://github.com/thorstenkramm/fillfs/raw/refs/heads/main/samples";
    let entry = |name: &str, ext: &str, size: u64| {
        Seed::new(&format!("{BASE}/{name}"), name, ext, size)
    };
    vec![
        entry("img_01.jpg", ".jpg", 2_624_144),
        entry("img_02.jpg", ".jpg", 1_304_804),
        entry("img_03.jpg", ".jpg", 881_435),
        entry("img_04.jpg", ".jpg", 2_052_754),
        entry("img_05.jpg", ".jpg", 581_189),
        entry("img_06.jpg", ".jpg", 1_460_410),
        entry("img_07.jpg", ".jpg", 843_609),
        entry("img_500kB.webp", ".webp", 517_842),
        entry("img_50kB.webp", ".webp", 50_408),
        entry("opendoc_100kB.odt", ".odt", 116_076),
        entry("portable_doc_150kB.pdf", ".pdf", 142_786),
        entry("portable_doc_500_kB.pdf", ".pdf", 469_513),
        entry("powerpoint.ppt", ".ppt", 1_028_608),
        entry("richtext_300kB.rtf", ".rtf", 295_392),
        entry("sound.mp3", ".mp3", 1_059_386),
        entry("sound.ogg", ".ogg", 1_032_948),
        entry("spreadsheet_01.xlsx", ".xlsx", 5_425),
        entry("spreadsheet_02.xlsx", ".xlsx", 9_299),
        entry("spreadsheet_03.xlsx", ".xlsx", 188_887),
        entry("video.mp4", ".mp4", 3_114_374),
        entry("word_100kB.docx", ".docx", 111_303),
        entry("word_1MB.docx", ".docx", 1_026_736),
        entry("word_500kB.doc", ".doc", 503_296),
    ]
}
