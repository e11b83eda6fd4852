// Translation-completeness predicates over a bilingual column pair.

use super::error::FilterError;
use super::list_filter::ListFilter;
use crate::listing::params::TranslationFilter;

/// Append the predicates for a translation-completeness filter.
///
/// "Missing" treats empty string and NULL as the same absence, since
/// bilingual free-text fields may be stored either way. "Complete" is the
/// conjunction across both languages, not a per-language negation.
pub fn apply_translation_filter(
    filter: &mut ListFilter,
    translation: TranslationFilter,
    english_column: &str,
    french_column: &str,
) -> Result<(), FilterError> {
    match translation {
        TranslationFilter::All => {}
        TranslationFilter::MissingEn => {
            filter.missing(english_column)?;
        }
        TranslationFilter::MissingFr => {
            filter.missing(french_column)?;
        }
        TranslationFilter::Complete => {
            filter.present(english_column)?;
            filter.present(french_column)?;
        }
    }
    Ok(())
}
