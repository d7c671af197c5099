//! Line-level cleanup of freshly converted judgments
//!
//! Runs once over the whole document before any field rule. It removes the
//! repository disclaimer and contact block that the directory stamps on every
//! page, lines holding only a page number, and short banner lines. Long lines
//! are kept even when they start with a banner phrase: a page break can glue
//! the banner onto real content.

use once_cell::sync::Lazy;
use regex::Regex;

/// Banner fragments; OCR often truncates them, hence the partial words.
const BANNER_PHRASES: &[&str] = &[
    "mahkamah agung republik indonesia",
    "direktori putusan",
    "hkama",
    "salinan putusan",
    "putusan.mahkamahagung.go.id",
    "halaman",
    "email kepaniteraanmahkamahagunggoid",
    "telp",
    "fax",
    "website",
    "ahkamah agung",
    "mah agung republik indonesia",
    "blik indonesi",
];

/// Banner lines longer than this are assumed to carry content.
const MAX_BANNER_WORDS: usize = 6;

static DISCLAIMER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?is)disclaimer\s+kepaniteraan\s+mahkamah\s+agung\s+republik\s+indonesia.+?kami\s+sajikan,?\s+hal\s+mana\s+akan\s+terus\s+kami\s+perbaiki\s+dari\s+waktu\s+ke[ -]?waktu\.",
    )
    .unwrap()
});

static INACCURACY_NOTICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)dalam\s+hal\s+anda\s+menemukan\s+inakurasi\s+informasi.*?(email|telp|website|\z)")
        .unwrap()
});

static PAGE_FOOTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)\bhal(?:aman)?\s*\d+\s*dari\s*\d+\s*hal(?:aman)?\b.*$").unwrap()
});

static CONTACT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^\s*(?:e-?mail|telp|fax|website)\s*:.*$").unwrap());

static NUMBER_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\s*$").unwrap());
static INLINE_BLANKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());

/// Strip repository boilerplate from a converted judgment.
///
/// Case is preserved; every field rule matches case-insensitively.
pub fn normalize_judgment(text: &str) -> String {
    let text = text.replace('\r', "");
    let text = DISCLAIMER.replace_all(&text, "");
    let text = INACCURACY_NOTICE.replace_all(&text, "${1}");
    let text = PAGE_FOOTER.replace_all(&text, "");
    let text = CONTACT_LINE.replace_all(&text, "");

    text.lines()
        .map(|line| INLINE_BLANKS.replace_all(line.trim(), " ").into_owned())
        .filter(|line| !line.is_empty() && !NUMBER_ONLY.is_match(line))
        .filter(|line| !is_banner_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_banner_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    if lower.split_whitespace().count() > MAX_BANNER_WORDS {
        return false;
    }
    if lower.contains("pidana") || lower.contains("menjatuhkan") {
        return false;
    }
    BANNER_PHRASES
        .iter()
        .any(|phrase| lower.starts_with(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_banner_and_number_lines() {
        let text = "Mahkamah Agung Republik Indonesia\n  12  \nMENGADILI:\nDirektori Putusan\n1. Menyatakan Terdakwa";
        assert_eq!(normalize_judgment(text), "MENGADILI:\n1. Menyatakan Terdakwa");
    }

    #[test]
    fn keeps_banner_prefixed_line_with_sentence_content() {
        let line = "halaman berikut memuat pertimbangan hakim tentang keadaan yang memberatkan";
        assert_eq!(normalize_judgment(line), line);
    }

    #[test]
    fn keeps_short_line_mentioning_pidana() {
        assert_eq!(normalize_judgment("halaman pidana penjara"), "halaman pidana penjara");
    }

    #[test]
    fn removes_disclaimer_block() {
        let text = "awal\nDisclaimer Kepaniteraan Mahkamah Agung Republik Indonesia berusaha untuk selalu mencantumkan informasi paling kini dan akurat sebagai bentuk komitmen yang kami sajikan, hal mana akan terus kami perbaiki dari waktu kewaktu.\nakhir";
        assert_eq!(normalize_judgment(text), "awal\nakhir");
    }

    #[test]
    fn removes_inaccuracy_notice_and_contact_line() {
        let text = "isi\nDalam hal Anda menemukan inakurasi informasi yang termuat pada situs ini, harap segera hubungi Kepaniteraan melalui :\nEmail : kepaniteraan@mahkamahagung.go.id\nTelp : 021-384 3348 (ext.318)\nlanjut";
        assert_eq!(normalize_judgment(text), "isi\nlanjut");
    }

    #[test]
    fn removes_page_footer_to_end_of_line() {
        let text = "barang bukti\nHalaman 3 dari 15 halaman Putusan Nomor 9/Pid.B/2023/PN Yyk\nberupa";
        assert_eq!(normalize_judgment(text), "barang bukti\nberupa");
    }
}
