//! Dialect specific built-in functions.
//!
//! These are classified (and highlighted) separately from standard keywords.
//! Classification checks this vocabulary first, so a word can never be both.

vocabulary! {
    /// A vendor built-in function name.
    VendorFunction {
        Dateadd => "DATEADD",
        Datediff => "DATEDIFF",
        Getdate => "GETDATE",
        Getutcdate => "GETUTCDATE",
        Convert => "CONVERT",
        Cast => "CAST",
        Hashbytes => "HASHBYTES",
        Newid => "NEWID",
        Isnull => "ISNULL",
        Coalesce => "COALESCE",
        RowNumber => "ROW_NUMBER",
        Stuff => "STUFF",
        Iif => "IIF",
        Choose => "CHOOSE",
        TryConvert => "TRY_CONVERT",
        TryCast => "TRY_CAST",
        Switchoffset => "SWITCHOFFSET",
        Todatetimeoffset => "TODATETIMEOFFSET",
        Eomonth => "EOMONTH",
        Datefromparts => "DATEFROMPARTS",
        Isdate => "ISDATE",
        Sysdatetime => "SYSDATETIME",
        Sysutcdatetime => "SYSUTCDATETIME",
        Sysdatetimeoffset => "SYSDATETIMEOFFSET",
        Patindex => "PATINDEX",
        Quotename => "QUOTENAME",
        Replicate => "REPLICATE",
        Reverse => "REVERSE",
        Space => "SPACE",
        Str => "STR",
        StringAgg => "STRING_AGG",
        StringSplit => "STRING_SPLIT",
        Translate => "TRANSLATE",
        Unicode => "UNICODE",
        Nchar => "NCHAR",
        Char => "CHAR",
        Ascii => "ASCII",
        Soundex => "SOUNDEX",
        Difference => "DIFFERENCE",
        Abs => "ABS",
        Ceiling => "CEILING",
        Floor => "FLOOR",
        Round => "ROUND",
        Sign => "SIGN",
        Power => "POWER",
        Sqrt => "SQRT",
        Log => "LOG",
        Log10 => "LOG10",
        Exp => "EXP",
        Rand => "RAND",
        Pi => "PI",
        Checksum => "CHECKSUM",
        BinaryChecksum => "BINARY_CHECKSUM",
        Compress => "COMPRESS",
        Decompress => "DECOMPRESS",
        ObjectId => "OBJECT_ID",
        ObjectName => "OBJECT_NAME",
        DbName => "DB_NAME",
        DbId => "DB_ID",
        SchemaName => "SCHEMA_NAME",
        SchemaId => "SCHEMA_ID",
        TypeName => "TYPE_NAME",
        TypeId => "TYPE_ID",
        Columnproperty => "COLUMNPROPERTY",
        Datalength => "DATALENGTH",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::keyword::Keyword;

    #[test]
    fn recognizes_case_insensitively() {
        assert_eq!(
            VendorFunction::from_word("DateAdd"),
            Some(VendorFunction::Dateadd)
        );
        assert_eq!(
            VendorFunction::from_word("row_number"),
            Some(VendorFunction::RowNumber)
        );
        assert_eq!(VendorFunction::from_word("log10"), Some(VendorFunction::Log10));
        assert_eq!(VendorFunction::from_word("select"), None);
    }

    #[test]
    fn disjoint_from_keywords() {
        for f in VendorFunction::ALL {
            assert!(
                Keyword::from_upper(f.as_str()).is_none(),
                "{f} is also a keyword"
            );
        }
        assert_eq!(VendorFunction::ALL.len(), 65);
    }
}
