//! Keyword tables, bucketed by lead letter.
//!
//! Each bucket is a small array of `(symbol, keyword)` pairs scanned
//! linearly, once per identifier candidate. Lookup keys are already
//! upper-cased by the lexer.

use crate::syntax::SyntaxKind;

type KeywordEntry = (SyntaxKind, &'static str);

const KW_A: &[KeywordEntry] = &[
    (SyntaxKind::Action, "ACTION"),
    (SyntaxKind::Add, "ADD"),
    (SyntaxKind::All, "ALL"),
    (SyntaxKind::Alter, "ALTER"),
    (SyntaxKind::And, "AND"),
    (SyntaxKind::As, "AS"),
    (SyntaxKind::At, "AT"),
    (SyntaxKind::Authorization, "AUTHORIZATION"),
    (SyntaxKind::Avg, "AVG"),
];

const KW_B: &[KeywordEntry] = &[
    (SyntaxKind::Between, "BETWEEN"),
    (SyntaxKind::Bit, "BIT"),
    (SyntaxKind::BitLength, "BIT_LENGTH"),
    (SyntaxKind::Both, "BOTH"),
    (SyntaxKind::By, "BY"),
];

const KW_C: &[KeywordEntry] = &[
    (SyntaxKind::Cascade, "CASCADE"),
    (SyntaxKind::Cascaded, "CASCADED"),
    (SyntaxKind::Case, "CASE"),
    (SyntaxKind::Cast, "CAST"),
    (SyntaxKind::Char, "CHAR"),
    (SyntaxKind::Character, "CHARACTER"),
    (SyntaxKind::CharLength, "CHAR_LENGTH"),
    (SyntaxKind::CharacterLength, "CHARACTER_LENGTH"),
    (SyntaxKind::Check, "CHECK"),
    (SyntaxKind::Coalesce, "COALESCE"),
    (SyntaxKind::Collate, "COLLATE"),
    (SyntaxKind::Column, "COLUMN"),
    (SyntaxKind::Commit, "COMMIT"),
    (SyntaxKind::Constraint, "CONSTRAINT"),
    (SyntaxKind::Convert, "CONVERT"),
    (SyntaxKind::Count, "COUNT"),
    (SyntaxKind::Create, "CREATE"),
    (SyntaxKind::Cross, "CROSS"),
    (SyntaxKind::CurrentDate, "CURRENT_DATE"),
    (SyntaxKind::CurrentTime, "CURRENT_TIME"),
    (SyntaxKind::CurrentTimestamp, "CURRENT_TIMESTAMP"),
    (SyntaxKind::CurrentUser, "CURRENT_USER"),
];

const KW_D: &[KeywordEntry] = &[
    (SyntaxKind::Date, "DATE"),
    (SyntaxKind::Day, "DAY"),
    (SyntaxKind::Dec, "DEC"),
    (SyntaxKind::Decimal, "DECIMAL"),
    (SyntaxKind::Default, "DEFAULT"),
    (SyntaxKind::Delete, "DELETE"),
    (SyntaxKind::Distinct, "DISTINCT"),
    (SyntaxKind::Double, "DOUBLE"),
    (SyntaxKind::Drop, "DROP"),
];

const KW_E: &[KeywordEntry] = &[
    (SyntaxKind::Else, "ELSE"),
    (SyntaxKind::End, "END"),
    (SyntaxKind::Escape, "ESCAPE"),
    (SyntaxKind::Except, "EXCEPT"),
    (SyntaxKind::Exists, "EXISTS"),
    (SyntaxKind::Extract, "EXTRACT"),
];

const KW_F: &[KeywordEntry] = &[
    (SyntaxKind::Float, "FLOAT"),
    (SyntaxKind::For, "FOR"),
    (SyntaxKind::Foreign, "FOREIGN"),
    (SyntaxKind::From, "FROM"),
    (SyntaxKind::Full, "FULL"),
];

const KW_G: &[KeywordEntry] = &[
    (SyntaxKind::Global, "GLOBAL"),
    (SyntaxKind::Grant, "GRANT"),
    (SyntaxKind::Group, "GROUP"),
];

const KW_H: &[KeywordEntry] = &[
    (SyntaxKind::Having, "HAVING"),
    (SyntaxKind::Hour, "HOUR"),
];

const KW_I: &[KeywordEntry] = &[
    (SyntaxKind::In, "IN"),
    (SyntaxKind::Inner, "INNER"),
    (SyntaxKind::Insert, "INSERT"),
    (SyntaxKind::Int, "INT"),
    (SyntaxKind::Integer, "INTEGER"),
    (SyntaxKind::Intersect, "INTERSECT"),
    (SyntaxKind::Interval, "INTERVAL"),
    (SyntaxKind::Into, "INTO"),
    (SyntaxKind::Is, "IS"),
];

const KW_J: &[KeywordEntry] = &[(SyntaxKind::Join, "JOIN")];

const KW_K: &[KeywordEntry] = &[(SyntaxKind::Key, "KEY")];

const KW_L: &[KeywordEntry] = &[
    (SyntaxKind::Leading, "LEADING"),
    (SyntaxKind::Left, "LEFT"),
    (SyntaxKind::Like, "LIKE"),
    (SyntaxKind::Local, "LOCAL"),
    (SyntaxKind::Lower, "LOWER"),
];

const KW_M: &[KeywordEntry] = &[
    (SyntaxKind::Match, "MATCH"),
    (SyntaxKind::Max, "MAX"),
    (SyntaxKind::Min, "MIN"),
    (SyntaxKind::Minute, "MINUTE"),
    (SyntaxKind::Month, "MONTH"),
];

const KW_N: &[KeywordEntry] = &[
    (SyntaxKind::National, "NATIONAL"),
    (SyntaxKind::Natural, "NATURAL"),
    (SyntaxKind::Nchar, "NCHAR"),
    (SyntaxKind::No, "NO"),
    (SyntaxKind::Not, "NOT"),
    (SyntaxKind::Null, "NULL"),
    (SyntaxKind::Nullif, "NULLIF"),
    (SyntaxKind::Numeric, "NUMERIC"),
];

const KW_O: &[KeywordEntry] = &[
    (SyntaxKind::OctetLength, "OCTET_LENGTH"),
    (SyntaxKind::On, "ON"),
    (SyntaxKind::Option, "OPTION"),
    (SyntaxKind::Or, "OR"),
    (SyntaxKind::Outer, "OUTER"),
];

const KW_P: &[KeywordEntry] = &[
    (SyntaxKind::Partial, "PARTIAL"),
    (SyntaxKind::Position, "POSITION"),
    (SyntaxKind::Precision, "PRECISION"),
    (SyntaxKind::Primary, "PRIMARY"),
    (SyntaxKind::Privileges, "PRIVILEGES"),
    (SyntaxKind::Public, "PUBLIC"),
];

const KW_R: &[KeywordEntry] = &[
    (SyntaxKind::Real, "REAL"),
    (SyntaxKind::References, "REFERENCES"),
    (SyntaxKind::Restrict, "RESTRICT"),
    (SyntaxKind::Right, "RIGHT"),
    (SyntaxKind::Rollback, "ROLLBACK"),
];

const KW_S: &[KeywordEntry] = &[
    (SyntaxKind::Schema, "SCHEMA"),
    (SyntaxKind::Second, "SECOND"),
    (SyntaxKind::Select, "SELECT"),
    (SyntaxKind::SessionUser, "SESSION_USER"),
    (SyntaxKind::Set, "SET"),
    (SyntaxKind::Smallint, "SMALLINT"),
    (SyntaxKind::Substring, "SUBSTRING"),
    (SyntaxKind::Sum, "SUM"),
    (SyntaxKind::SystemUser, "SYSTEM_USER"),
];

const KW_T: &[KeywordEntry] = &[
    (SyntaxKind::Table, "TABLE"),
    (SyntaxKind::Temporary, "TEMPORARY"),
    (SyntaxKind::Then, "THEN"),
    (SyntaxKind::Time, "TIME"),
    (SyntaxKind::Timestamp, "TIMESTAMP"),
    (SyntaxKind::To, "TO"),
    (SyntaxKind::Trailing, "TRAILING"),
    (SyntaxKind::Translate, "TRANSLATE"),
    (SyntaxKind::Trim, "TRIM"),
];

const KW_U: &[KeywordEntry] = &[
    (SyntaxKind::Union, "UNION"),
    (SyntaxKind::Unique, "UNIQUE"),
    (SyntaxKind::Update, "UPDATE"),
    (SyntaxKind::Upper, "UPPER"),
    (SyntaxKind::Usage, "USAGE"),
    (SyntaxKind::User, "USER"),
    (SyntaxKind::Using, "USING"),
];

const KW_V: &[KeywordEntry] = &[
    (SyntaxKind::Value, "VALUE"),
    (SyntaxKind::Values, "VALUES"),
    (SyntaxKind::Varbit, "VARBIT"),
    (SyntaxKind::Varchar, "VARCHAR"),
    (SyntaxKind::Varying, "VARYING"),
    (SyntaxKind::View, "VIEW"),
];

const KW_W: &[KeywordEntry] = &[
    (SyntaxKind::When, "WHEN"),
    (SyntaxKind::Where, "WHERE"),
    (SyntaxKind::With, "WITH"),
    (SyntaxKind::Work, "WORK"),
];

const KW_Y: &[KeywordEntry] = &[(SyntaxKind::Year, "YEAR")];

const KW_Z: &[KeywordEntry] = &[(SyntaxKind::Zone, "ZONE")];

fn bucket(lead: u8) -> &'static [KeywordEntry] {
    match lead {
        b'A' => KW_A,
        b'B' => KW_B,
        b'C' => KW_C,
        b'D' => KW_D,
        b'E' => KW_E,
        b'F' => KW_F,
        b'G' => KW_G,
        b'H' => KW_H,
        b'I' => KW_I,
        b'J' => KW_J,
        b'K' => KW_K,
        b'L' => KW_L,
        b'M' => KW_M,
        b'N' => KW_N,
        b'O' => KW_O,
        b'P' => KW_P,
        b'R' => KW_R,
        b'S' => KW_S,
        b'T' => KW_T,
        b'U' => KW_U,
        b'V' => KW_V,
        b'W' => KW_W,
        b'Y' => KW_Y,
        b'Z' => KW_Z,
        _ => &[],
    }
}

/// Look up an already upper-cased word that ends at a non-identifier
/// boundary. Returns the keyword symbol, or `None` when the word is an
/// ordinary identifier.
pub(crate) fn lookup(word_upper: &str) -> Option<SyntaxKind> {
    let lead = *word_upper.as_bytes().first()?;
    bucket(lead)
        .iter()
        .find(|(_, kw)| *kw == word_upper)
        .map(|&(kind, _)| kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_keywords_in_their_buckets() {
        assert_eq!(lookup("SELECT"), Some(SyntaxKind::Select));
        assert_eq!(lookup("CURRENT_TIMESTAMP"), Some(SyntaxKind::CurrentTimestamp));
        assert_eq!(lookup("ZONE"), Some(SyntaxKind::Zone));
    }

    #[test]
    fn longer_runs_are_not_keywords() {
        assert_eq!(lookup("SELECTED"), None);
        assert_eq!(lookup("INTERVALS"), None);
        assert_eq!(lookup("XYZZY"), None);
    }

    #[test]
    fn buckets_hold_upper_cased_entries_under_their_lead_letter() {
        for lead in b'A'..=b'Z' {
            for (_, kw) in bucket(lead) {
                assert_eq!(kw.as_bytes()[0], lead);
                assert_eq!(kw.to_uppercase(), *kw);
            }
        }
    }
}
