//! Fixed candidate lists offered by context, plus the function signature
//! list used by prefix completion. Order is significant everywhere.
use super::candidate::{CandidateCategory as C, CompletionCandidate};
use crate::sql::{Keyword, VendorFunction};

const fn entry(text: &'static str, category: C, hint: &'static str) -> CompletionCandidate {
    CompletionCandidate::new(text, category, hint)
}

/// Offered right after `FROM` or any `JOIN`.
pub static FROM_CANDIDATES: [CompletionCandidate; 16] = [
    entry("[_Subscribers]", C::SystemView, "All Subscribers system view"),
    entry("[_Open]", C::SystemView, "Email Open tracking data"),
    entry("[_Click]", C::SystemView, "Email Click tracking data"),
    entry("[_Bounce]", C::SystemView, "Email Bounce data"),
    entry("[_Sent]", C::SystemView, "Email Send tracking data"),
    entry("[_Unsubscribe]", C::SystemView, "Unsubscribe tracking data"),
    entry("[_Job]", C::SystemView, "Email Job data"),
    entry("[_Complaint]", C::SystemView, "Spam Complaint data"),
    entry("[_FTAF]", C::SystemView, "Forward to a Friend data"),
    entry("[_ListSubscribers]", C::SystemView, "List subscriber memberships"),
    entry("[_EnterpriseAttribute]", C::SystemView, "Enterprise profile attributes"),
    entry("[_MobileAddress]", C::SystemView, "Mobile subscriber addresses"),
    entry("[_MobilePush]", C::SystemView, "Mobile push tracking data"),
    entry("[_JourneyActivity]", C::SystemView, "Journey activity data"),
    entry("[_Journey]", C::SystemView, "Journey data"),
    entry("[dbo].[YourTableName]", C::Pattern, "Custom table with schema"),
];

/// Offered right after `WHERE`.
pub static WHERE_CANDIDATES: [CompletionCandidate; 8] = [
    entry("Status = 'Active'", C::Condition, "Active subscribers only"),
    entry("EventDate >= DATEADD(day, -30, GETDATE())", C::Condition, "Last 30 days"),
    entry("EventDate >= DATEADD(day, -7, GETDATE())", C::Condition, "Last 7 days"),
    entry("EventDate >= DATEADD(month, -3, GETDATE())", C::Condition, "Last 3 months"),
    entry("IsUnique = 1", C::Condition, "Unique events only"),
    entry("SubscriberKey IS NOT NULL", C::Condition, "Non-null subscriber keys"),
    entry("EmailAddress LIKE '%@%.%'", C::Condition, "Valid email pattern"),
    entry("LEN(LTRIM(RTRIM(EmailAddress))) > 0", C::Condition, "Non-empty email"),
];

/// Offered right after `SELECT`.
pub static SELECT_CANDIDATES: [CompletionCandidate; 10] = [
    entry("TOP 100", C::Keyword, "Limit results"),
    entry("DISTINCT", C::Keyword, "Unique rows only"),
    entry("SubscriberKey", C::Field, "Common subscriber identifier"),
    entry("EmailAddress", C::Field, "Subscriber email"),
    entry("FirstName", C::Field, "Subscriber first name"),
    entry("LastName", C::Field, "Subscriber last name"),
    entry("Status", C::Field, "Subscriber status"),
    entry("DateJoined", C::Field, "Subscriber join date"),
    entry("COUNT(*) AS Total", C::Aggregate, "Count all records"),
    entry(
        "COUNT(DISTINCT SubscriberKey) AS UniqueCount",
        C::Aggregate,
        "Count unique subscribers",
    ),
];

static DATEADD_PARAMETERS: [CompletionCandidate; 7] = [
    entry("day, -30, GETDATE())", C::Param, "30 days ago"),
    entry("day, -7, GETDATE())", C::Param, "7 days ago"),
    entry("day, -1, GETDATE())", C::Param, "Yesterday"),
    entry("month, -1, GETDATE())", C::Param, "1 month ago"),
    entry("month, -3, GETDATE())", C::Param, "3 months ago"),
    entry("year, -1, GETDATE())", C::Param, "1 year ago"),
    entry("hour, -24, GETDATE())", C::Param, "24 hours ago"),
];

static CONVERT_PARAMETERS: [CompletionCandidate; 6] = [
    entry("VARCHAR(10), GETDATE(), 120)", C::Param, "Date as YYYY-MM-DD"),
    entry("VARCHAR(19), GETDATE(), 120)", C::Param, "DateTime YYYY-MM-DD HH:MM:SS"),
    entry("VARCHAR(50), FieldName)", C::Param, "Field to VARCHAR"),
    entry("INT, FieldName)", C::Param, "Field to INT"),
    entry("DATETIME, FieldName, 101)", C::Param, "String to DateTime (MM/DD/YYYY)"),
    entry("DATE, GETDATE())", C::Param, "Current date only (no time)"),
];

static HASHBYTES_PARAMETERS: [CompletionCandidate; 3] = [
    entry("'SHA2_256', SubscriberKey)", C::Param, "SHA-256 hash of SubscriberKey"),
    entry("'SHA2_256', EmailAddress)", C::Param, "SHA-256 hash of Email"),
    entry("'MD5', SubscriberKey)", C::Param, "MD5 hash (less secure)"),
];

static DATEDIFF_PARAMETERS: [CompletionCandidate; 4] = [
    entry("day, StartDate, GETDATE())", C::Param, "Days between date and now"),
    entry("month, DateJoined, GETDATE())", C::Param, "Months since joined"),
    entry("year, BirthDate, GETDATE())", C::Param, "Age in years"),
    entry("hour, EventDate, GETDATE())", C::Param, "Hours since event"),
];

/// Call signatures matched by prefix after keywords and vendor functions.
pub static SIGNATURES: [CompletionCandidate; 45] = [
    entry("COUNT(", C::Function, "COUNT(expression)"),
    entry("SUM(", C::Function, "SUM(expression)"),
    entry("AVG(", C::Function, "AVG(expression)"),
    entry("MIN(", C::Function, "MIN(expression)"),
    entry("MAX(", C::Function, "MAX(expression)"),
    entry("LEN(", C::Function, "LEN(string)"),
    entry("SUBSTRING(", C::Function, "SUBSTRING(string, start, length)"),
    entry("REPLACE(", C::Function, "REPLACE(string, find, replace)"),
    entry("TRIM(", C::Function, "TRIM(string)"),
    entry("LTRIM(", C::Function, "LTRIM(string)"),
    entry("RTRIM(", C::Function, "RTRIM(string)"),
    entry("UPPER(", C::Function, "UPPER(string)"),
    entry("LOWER(", C::Function, "LOWER(string)"),
    entry("CONCAT(", C::Function, "CONCAT(str1, str2, ...)"),
    entry("CHARINDEX(", C::Function, "CHARINDEX(find, string, start)"),
    entry("FORMAT(", C::Function, "FORMAT(value, format, culture)"),
    entry("DATEADD(", C::Vendor, "DATEADD(datepart, number, date)"),
    entry("DATEDIFF(", C::Vendor, "DATEDIFF(datepart, start, end)"),
    entry("GETDATE()", C::Vendor, "Returns current datetime"),
    entry("GETUTCDATE()", C::Vendor, "Returns current UTC datetime"),
    entry("CONVERT(", C::Vendor, "CONVERT(type, expression, style)"),
    entry("CAST(", C::Vendor, "CAST(expression AS type)"),
    entry("HASHBYTES(", C::Vendor, "HASHBYTES('algorithm', input)"),
    entry("NEWID()", C::Vendor, "Returns a new uniqueidentifier"),
    entry("ISNULL(", C::Vendor, "ISNULL(check, replacement)"),
    entry("COALESCE(", C::Vendor, "COALESCE(val1, val2, ...)"),
    entry(
        "ROW_NUMBER() OVER(",
        C::Vendor,
        "ROW_NUMBER() OVER(PARTITION BY col ORDER BY col)",
    ),
    entry("STUFF(", C::Vendor, "STUFF(string, start, length, insert)"),
    entry("IIF(", C::Vendor, "IIF(condition, true_val, false_val)"),
    entry("CHOOSE(", C::Vendor, "CHOOSE(index, val1, val2, ...)"),
    entry("TRY_CONVERT(", C::Vendor, "TRY_CONVERT(type, expression, style)"),
    entry("TRY_CAST(", C::Vendor, "TRY_CAST(expression AS type)"),
    entry("EOMONTH(", C::Vendor, "EOMONTH(start_date, months)"),
    entry("DATEFROMPARTS(", C::Vendor, "DATEFROMPARTS(year, month, day)"),
    entry("ISDATE(", C::Vendor, "ISDATE(expression)"),
    entry("DATEPART(", C::Vendor, "DATEPART(datepart, date)"),
    entry("DATENAME(", C::Vendor, "DATENAME(datepart, date)"),
    entry("RANK() OVER(", C::Function, "RANK() OVER(ORDER BY col)"),
    entry("DENSE_RANK() OVER(", C::Function, "DENSE_RANK() OVER(ORDER BY col)"),
    entry("PATINDEX(", C::Vendor, "PATINDEX('%pattern%', expression)"),
    entry("QUOTENAME(", C::Vendor, "QUOTENAME(string, quote_char)"),
    entry("ABS(", C::Vendor, "ABS(numeric_expression)"),
    entry("CEILING(", C::Vendor, "CEILING(numeric_expression)"),
    entry("FLOOR(", C::Vendor, "FLOOR(numeric_expression)"),
    entry("ROUND(", C::Vendor, "ROUND(expression, length)"),
];

/// The fixed list offered right after a clause keyword, if it has one.
/// Every join shares the `FROM` list.
pub fn clause_candidates(keyword: Keyword) -> Option<&'static [CompletionCandidate]> {
    match keyword {
        Keyword::Select => Some(SELECT_CANDIDATES.as_slice()),
        Keyword::From | Keyword::Join => Some(FROM_CANDIDATES.as_slice()),
        Keyword::Where => Some(WHERE_CANDIDATES.as_slice()),
        _ => None,
    }
}

/// Argument snippets offered right after `func(`, for the functions that
/// have them.
pub fn parameter_candidates(func: VendorFunction) -> Option<&'static [CompletionCandidate]> {
    match func {
        VendorFunction::Dateadd => Some(DATEADD_PARAMETERS.as_slice()),
        VendorFunction::Convert => Some(CONVERT_PARAMETERS.as_slice()),
        VendorFunction::Hashbytes => Some(HASHBYTES_PARAMETERS.as_slice()),
        VendorFunction::Datediff => Some(DATEDIFF_PARAMETERS.as_slice()),
        _ => None,
    }
}

/// Built-in system views, for a quick-reference listing.
pub fn system_views() -> impl Iterator<Item = &'static CompletionCandidate> {
    FROM_CANDIDATES
        .iter()
        .filter(|c| c.category == C::SystemView)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_views_exclude_patterns() {
        let views: Vec<_> = system_views().map(|c| c.insert_text).collect();
        assert_eq!(views.len(), 15);
        assert_eq!(views.first(), Some(&"[_Subscribers]"));
        assert!(!views.contains(&"[dbo].[YourTableName]"));
    }

    #[test]
    fn joins_share_from_list() {
        assert_eq!(
            clause_candidates(Keyword::Join),
            clause_candidates(Keyword::From)
        );
        assert_eq!(clause_candidates(Keyword::Order), None);
    }

    #[test]
    fn parameter_lists() {
        let sizes: Vec<_> = [
            VendorFunction::Dateadd,
            VendorFunction::Convert,
            VendorFunction::Hashbytes,
            VendorFunction::Datediff,
        ]
        .into_iter()
        .map(|f| parameter_candidates(f).map_or(0, <[_]>::len))
        .collect();
        assert_eq!(sizes, vec![7, 6, 3, 4]);
        assert_eq!(parameter_candidates(VendorFunction::Getdate), None);
    }

    #[test]
    fn signatures_are_upper_case() {
        for sig in &SIGNATURES {
            assert_eq!(sig.display_text, sig.display_text.to_ascii_uppercase());
            assert_eq!(sig.display_text, sig.insert_text);
        }
    }
}
