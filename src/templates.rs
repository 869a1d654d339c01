//! Built-in query templates for common audience and tracking queries.

/// A named, ready-to-edit query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{id}: {name}")]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub sql: &'static str,
}

pub static TEMPLATES: [Template; 16] = [
    Template {
        id: "dedup-email",
        name: "Deduplicate by Email",
        description: "Remove duplicate subscribers keeping the most recent record",
        sql: concat!(
            "SELECT\n",
            "  SubscriberKey,\n",
            "  EmailAddress,\n",
            "  FirstName,\n",
            "  LastName,\n",
            "  DateAdded\n",
            "FROM (\n",
            "  SELECT\n",
            "    *,\n",
            "    ROW_NUMBER() OVER (\n",
            "      PARTITION BY EmailAddress\n",
            "      ORDER BY DateAdded DESC\n",
            "    ) AS rn\n",
            "  FROM [Your_Data_Extension]\n",
            ") sub\n",
            "WHERE sub.rn = 1",
        ),
    },
    Template {
        id: "opens-30d",
        name: "Opens in Last 30 Days",
        description: "Find subscribers who opened emails in the last 30 days",
        sql: concat!(
            "SELECT DISTINCT\n",
            "  s.SubscriberKey,\n",
            "  s.EmailAddress,\n",
            "  o.EventDate AS LastOpenDate\n",
            "FROM [_Subscribers] s\n",
            "INNER JOIN [_Open] o\n",
            "  ON s.SubscriberKey = o.SubscriberKey\n",
            "WHERE\n",
            "  o.EventDate >= DATEADD(day, -30, GETDATE())\n",
            "  AND o.IsUnique = 1\n",
            "ORDER BY o.EventDate DESC",
        ),
    },
    Template {
        id: "click-no-convert",
        name: "Clicked but Didn't Convert",
        description: "Subscribers who clicked but never converted",
        sql: concat!(
            "SELECT DISTINCT\n",
            "  c.SubscriberKey,\n",
            "  c.EmailAddress,\n",
            "  c.EventDate AS ClickDate,\n",
            "  c.URL\n",
            "FROM [_Click] c\n",
            "LEFT JOIN [Conversions] conv\n",
            "  ON c.SubscriberKey = conv.SubscriberKey\n",
            "  AND conv.ConversionDate >= c.EventDate\n",
            "WHERE\n",
            "  c.EventDate >= DATEADD(day, -30, GETDATE())\n",
            "  AND c.IsUnique = 1\n",
            "  AND conv.SubscriberKey IS NULL\n",
            "ORDER BY c.EventDate DESC",
        ),
    },
    Template {
        id: "join-de",
        name: "Join Subscribers with DE",
        description: "Join subscriber data with a custom data extension",
        sql: concat!(
            "SELECT\n",
            "  s.SubscriberKey,\n",
            "  s.EmailAddress,\n",
            "  s.Status,\n",
            "  de.CustomField1,\n",
            "  de.CustomField2,\n",
            "  de.LastModified\n",
            "FROM [_Subscribers] s\n",
            "INNER JOIN [Your_Data_Extension] de\n",
            "  ON s.SubscriberKey = de.SubscriberKey\n",
            "WHERE\n",
            "  s.Status = 'Active'",
        ),
    },
    Template {
        id: "engagement-score",
        name: "Engagement Scoring",
        description: "Calculate engagement score based on opens, clicks, and bounces",
        sql: concat!(
            "SELECT\n",
            "  s.SubscriberKey,\n",
            "  s.EmailAddress,\n",
            "  ISNULL(opens.OpenCount, 0) AS Opens,\n",
            "  ISNULL(clicks.ClickCount, 0) AS Clicks,\n",
            "  ISNULL(bounces.BounceCount, 0) AS Bounces,\n",
            "  (\n",
            "    ISNULL(opens.OpenCount, 0) * 1\n",
            "    + ISNULL(clicks.ClickCount, 0) * 3\n",
            "    - ISNULL(bounces.BounceCount, 0) * 5\n",
            "  ) AS EngagementScore\n",
            "FROM [_Subscribers] s\n",
            "LEFT JOIN (\n",
            "  SELECT SubscriberKey, COUNT(*) AS OpenCount\n",
            "  FROM [_Open]\n",
            "  WHERE EventDate >= DATEADD(day, -90, GETDATE())\n",
            "  GROUP BY SubscriberKey\n",
            ") opens ON s.SubscriberKey = opens.SubscriberKey\n",
            "LEFT JOIN (\n",
            "  SELECT SubscriberKey, COUNT(*) AS ClickCount\n",
            "  FROM [_Click]\n",
            "  WHERE EventDate >= DATEADD(day, -90, GETDATE())\n",
            "  GROUP BY SubscriberKey\n",
            ") clicks ON s.SubscriberKey = clicks.SubscriberKey\n",
            "LEFT JOIN (\n",
            "  SELECT SubscriberKey, COUNT(*) AS BounceCount\n",
            "  FROM [_Bounce]\n",
            "  WHERE EventDate >= DATEADD(day, -90, GETDATE())\n",
            "  GROUP BY SubscriberKey\n",
            ") bounces ON s.SubscriberKey = bounces.SubscriberKey\n",
            "WHERE s.Status = 'Active'\n",
            "ORDER BY EngagementScore DESC",
        ),
    },
    Template {
        id: "bounce-analysis",
        name: "Bounce Analysis",
        description: "Analyze bounce types and frequency",
        sql: concat!(
            "SELECT\n",
            "  b.SubscriberKey,\n",
            "  s.EmailAddress,\n",
            "  b.BounceCategory,\n",
            "  b.BounceSubcategory,\n",
            "  b.SMTPBounceReason,\n",
            "  COUNT(*) AS BounceCount,\n",
            "  MAX(b.EventDate) AS LastBounceDate\n",
            "FROM [_Bounce] b\n",
            "INNER JOIN [_Subscribers] s\n",
            "  ON b.SubscriberKey = s.SubscriberKey\n",
            "WHERE\n",
            "  b.EventDate >= DATEADD(day, -90, GETDATE())\n",
            "GROUP BY\n",
            "  b.SubscriberKey,\n",
            "  s.EmailAddress,\n",
            "  b.BounceCategory,\n",
            "  b.BounceSubcategory,\n",
            "  b.SMTPBounceReason\n",
            "HAVING COUNT(*) >= 2\n",
            "ORDER BY BounceCount DESC",
        ),
    },
    Template {
        id: "unsub-trend",
        name: "Unsubscribe Trend",
        description: "Track unsubscribe trends over time",
        sql: concat!(
            "SELECT\n",
            "  CONVERT(VARCHAR(7), u.EventDate, 120) AS MonthYear,\n",
            "  COUNT(*) AS UnsubCount,\n",
            "  COUNT(DISTINCT u.SubscriberKey) AS UniqueUnsubs\n",
            "FROM [_Unsubscribe] u\n",
            "WHERE\n",
            "  u.EventDate >= DATEADD(month, -12, GETDATE())\n",
            "GROUP BY\n",
            "  CONVERT(VARCHAR(7), u.EventDate, 120)\n",
            "ORDER BY MonthYear ASC",
        ),
    },
    Template {
        id: "journey-audience",
        name: "Journey Entry Audience",
        description: "Build audience for journey entry based on criteria",
        sql: concat!(
            "SELECT\n",
            "  s.SubscriberKey,\n",
            "  s.EmailAddress,\n",
            "  s.FirstName,\n",
            "  de.SegmentName,\n",
            "  de.LastPurchaseDate\n",
            "FROM [_Subscribers] s\n",
            "INNER JOIN [Customer_Data] de\n",
            "  ON s.SubscriberKey = de.SubscriberKey\n",
            "WHERE\n",
            "  s.Status = 'Active'\n",
            "  AND de.LastPurchaseDate >= DATEADD(day, -60, GETDATE())\n",
            "  AND de.SegmentName IN ('High Value', 'Medium Value')\n",
            "  AND s.SubscriberKey NOT IN (\n",
            "    SELECT SubscriberKey\n",
            "    FROM [Journey_Exclusion_List]\n",
            "  )",
        ),
    },
    Template {
        id: "de-cleanup",
        name: "DE Cleanup (Nulls & Dupes)",
        description: "Find and prepare records for data extension cleanup",
        sql: concat!(
            "-- Find records with NULL key fields\n",
            "SELECT 'NULL_RECORDS' AS IssueType, COUNT(*) AS RecordCount\n",
            "FROM [Your_Data_Extension]\n",
            "WHERE\n",
            "  SubscriberKey IS NULL\n",
            "  OR EmailAddress IS NULL\n",
            "  OR LEN(LTRIM(RTRIM(EmailAddress))) = 0\n",
            "\n",
            "UNION ALL\n",
            "\n",
            "-- Find duplicate records\n",
            "SELECT 'DUPLICATES' AS IssueType, COUNT(*) AS RecordCount\n",
            "FROM (\n",
            "  SELECT\n",
            "    EmailAddress,\n",
            "    ROW_NUMBER() OVER (\n",
            "      PARTITION BY EmailAddress\n",
            "      ORDER BY DateAdded DESC\n",
            "    ) AS rn\n",
            "  FROM [Your_Data_Extension]\n",
            "  WHERE EmailAddress IS NOT NULL\n",
            ") sub\n",
            "WHERE sub.rn > 1",
        ),
    },
    Template {
        id: "date-segment",
        name: "Date-Based Segmentation",
        description: "Segment subscribers by date ranges",
        sql: concat!(
            "SELECT\n",
            "  SubscriberKey,\n",
            "  EmailAddress,\n",
            "  LastActivityDate,\n",
            "  CASE\n",
            "    WHEN LastActivityDate >= DATEADD(day, -7, GETDATE())\n",
            "      THEN 'Active (7 days)'\n",
            "    WHEN LastActivityDate >= DATEADD(day, -30, GETDATE())\n",
            "      THEN 'Recent (30 days)'\n",
            "    WHEN LastActivityDate >= DATEADD(day, -90, GETDATE())\n",
            "      THEN 'Lapsing (90 days)'\n",
            "    WHEN LastActivityDate >= DATEADD(day, -180, GETDATE())\n",
            "      THEN 'At Risk (180 days)'\n",
            "    ELSE 'Inactive (180+ days)'\n",
            "  END AS EngagementSegment\n",
            "FROM [Your_Data_Extension]\n",
            "WHERE\n",
            "  Status = 'Active'\n",
            "ORDER BY LastActivityDate DESC",
        ),
    },
    Template {
        id: "cross-de",
        name: "Cross-DE Subscriber Lookup",
        description: "Find a subscriber across multiple data extensions",
        sql: concat!(
            "SELECT\n",
            "  'Subscribers' AS SourceDE,\n",
            "  SubscriberKey,\n",
            "  EmailAddress,\n",
            "  Status\n",
            "FROM [_Subscribers]\n",
            "WHERE EmailAddress = 'user@example.com'\n",
            "\n",
            "UNION ALL\n",
            "\n",
            "SELECT\n",
            "  'Customer_Data' AS SourceDE,\n",
            "  SubscriberKey,\n",
            "  EmailAddress,\n",
            "  Status\n",
            "FROM [Customer_Data]\n",
            "WHERE EmailAddress = 'user@example.com'\n",
            "\n",
            "UNION ALL\n",
            "\n",
            "SELECT\n",
            "  'Purchase_History' AS SourceDE,\n",
            "  SubscriberKey,\n",
            "  EmailAddress,\n",
            "  'N/A' AS Status\n",
            "FROM [Purchase_History]\n",
            "WHERE EmailAddress = 'user@example.com'",
        ),
    },
    Template {
        id: "send-perf",
        name: "Email Send Performance",
        description: "Summarize email send performance metrics",
        sql: concat!(
            "SELECT\n",
            "  j.EmailName,\n",
            "  j.DeliveredTime,\n",
            "  COUNT(DISTINCT s.SubscriberKey) AS TotalSent,\n",
            "  COUNT(DISTINCT o.SubscriberKey) AS UniqueOpens,\n",
            "  COUNT(DISTINCT c.SubscriberKey) AS UniqueClicks,\n",
            "  COUNT(DISTINCT b.SubscriberKey) AS Bounces,\n",
            "  COUNT(DISTINCT u.SubscriberKey) AS Unsubscribes,\n",
            "  CAST(\n",
            "    ROUND(COUNT(DISTINCT o.SubscriberKey) * 100.0 / NULLIF(COUNT(DISTINCT s.SubscriberKey), 0), 2)\n",
            "    AS DECIMAL(5,2)\n",
            "  ) AS OpenRate,\n",
            "  CAST(\n",
            "    ROUND(COUNT(DISTINCT c.SubscriberKey) * 100.0 / NULLIF(COUNT(DISTINCT s.SubscriberKey), 0), 2)\n",
            "    AS DECIMAL(5,2)\n",
            "  ) AS ClickRate\n",
            "FROM [_Job] j\n",
            "LEFT JOIN [_Sent] s ON j.JobID = s.JobID\n",
            "LEFT JOIN [_Open] o ON j.JobID = o.JobID AND o.IsUnique = 1\n",
            "LEFT JOIN [_Click] c ON j.JobID = c.JobID AND c.IsUnique = 1\n",
            "LEFT JOIN [_Bounce] b ON j.JobID = b.JobID\n",
            "LEFT JOIN [_Unsubscribe] u ON j.JobID = u.JobID\n",
            "WHERE\n",
            "  j.DeliveredTime >= DATEADD(day, -30, GETDATE())\n",
            "GROUP BY\n",
            "  j.EmailName,\n",
            "  j.DeliveredTime\n",
            "ORDER BY j.DeliveredTime DESC",
        ),
    },
    Template {
        id: "ab-test",
        name: "A/B Test Comparison",
        description: "Compare A/B test results between two email versions",
        sql: concat!(
            "SELECT\n",
            "  'Version A' AS TestVersion,\n",
            "  COUNT(DISTINCT s.SubscriberKey) AS Sent,\n",
            "  COUNT(DISTINCT o.SubscriberKey) AS Opens,\n",
            "  COUNT(DISTINCT c.SubscriberKey) AS Clicks,\n",
            "  CAST(ROUND(COUNT(DISTINCT o.SubscriberKey) * 100.0 / NULLIF(COUNT(DISTINCT s.SubscriberKey), 0), 2) AS DECIMAL(5,2)) AS OpenRate,\n",
            "  CAST(ROUND(COUNT(DISTINCT c.SubscriberKey) * 100.0 / NULLIF(COUNT(DISTINCT s.SubscriberKey), 0), 2) AS DECIMAL(5,2)) AS CTR\n",
            "FROM [_Sent] s\n",
            "LEFT JOIN [_Open] o ON s.JobID = o.JobID AND s.SubscriberKey = o.SubscriberKey AND o.IsUnique = 1\n",
            "LEFT JOIN [_Click] c ON s.JobID = c.JobID AND s.SubscriberKey = c.SubscriberKey AND c.IsUnique = 1\n",
            "WHERE s.JobID = 12345 -- Version A JobID\n",
            "\n",
            "UNION ALL\n",
            "\n",
            "SELECT\n",
            "  'Version B' AS TestVersion,\n",
            "  COUNT(DISTINCT s.SubscriberKey) AS Sent,\n",
            "  COUNT(DISTINCT o.SubscriberKey) AS Opens,\n",
            "  COUNT(DISTINCT c.SubscriberKey) AS Clicks,\n",
            "  CAST(ROUND(COUNT(DISTINCT o.SubscriberKey) * 100.0 / NULLIF(COUNT(DISTINCT s.SubscriberKey), 0), 2) AS DECIMAL(5,2)) AS OpenRate,\n",
            "  CAST(ROUND(COUNT(DISTINCT c.SubscriberKey) * 100.0 / NULLIF(COUNT(DISTINCT s.SubscriberKey), 0), 2) AS DECIMAL(5,2)) AS CTR\n",
            "FROM [_Sent] s\n",
            "LEFT JOIN [_Open] o ON s.JobID = o.JobID AND s.SubscriberKey = o.SubscriberKey AND o.IsUnique = 1\n",
            "LEFT JOIN [_Click] c ON s.JobID = c.JobID AND s.SubscriberKey = c.SubscriberKey AND c.IsUnique = 1\n",
            "WHERE s.JobID = 12346 -- Version B JobID",
        ),
    },
    Template {
        id: "pref-center",
        name: "Preference Center Data",
        description: "Query subscriber preference center data",
        sql: concat!(
            "SELECT\n",
            "  s.SubscriberKey,\n",
            "  s.EmailAddress,\n",
            "  p.PreferenceCategory,\n",
            "  p.OptInStatus,\n",
            "  p.Frequency,\n",
            "  p.LastUpdated\n",
            "FROM [_Subscribers] s\n",
            "INNER JOIN [Preference_Center] p\n",
            "  ON s.SubscriberKey = p.SubscriberKey\n",
            "WHERE\n",
            "  s.Status = 'Active'\n",
            "  AND p.OptInStatus = 'OptedIn'\n",
            "ORDER BY p.LastUpdated DESC",
        ),
    },
    Template {
        id: "winback",
        name: "Win-Back Audience",
        description: "Identify inactive subscribers for win-back campaigns",
        sql: concat!(
            "SELECT\n",
            "  s.SubscriberKey,\n",
            "  s.EmailAddress,\n",
            "  s.FirstName,\n",
            "  MAX(o.EventDate) AS LastOpenDate,\n",
            "  MAX(c.EventDate) AS LastClickDate,\n",
            "  DATEDIFF(day, ISNULL(MAX(o.EventDate), s.DateJoined), GETDATE()) AS DaysSinceLastOpen\n",
            "FROM [_Subscribers] s\n",
            "LEFT JOIN [_Open] o\n",
            "  ON s.SubscriberKey = o.SubscriberKey\n",
            "LEFT JOIN [_Click] c\n",
            "  ON s.SubscriberKey = c.SubscriberKey\n",
            "WHERE\n",
            "  s.Status = 'Active'\n",
            "GROUP BY\n",
            "  s.SubscriberKey,\n",
            "  s.EmailAddress,\n",
            "  s.FirstName,\n",
            "  s.DateJoined\n",
            "HAVING\n",
            "  DATEDIFF(day, ISNULL(MAX(o.EventDate), s.DateJoined), GETDATE()) BETWEEN 90 AND 365\n",
            "ORDER BY DaysSinceLastOpen DESC",
        ),
    },
    Template {
        id: "xml-concat",
        name: "STUFF + FOR XML PATH",
        description: "Concatenate multiple values into a comma-separated string",
        sql: concat!(
            "SELECT\n",
            "  a.SubscriberKey,\n",
            "  a.EmailAddress,\n",
            "  STUFF((\n",
            "    SELECT ', ' + b.ProductName\n",
            "    FROM [Purchase_History] b\n",
            "    WHERE b.SubscriberKey = a.SubscriberKey\n",
            "    ORDER BY b.PurchaseDate DESC\n",
            "    FOR XML PATH('')\n",
            "  ), 1, 2, '') AS Products\n",
            "FROM [_Subscribers] a\n",
            "WHERE a.Status = 'Active'\n",
            "GROUP BY\n",
            "  a.SubscriberKey,\n",
            "  a.EmailAddress",
        ),
    },
];

/// Look a template up by its id.
pub fn template(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Templates whose name, description or SQL contain `query`, ignoring case,
/// in catalog order. A blank query matches everything.
pub fn search_templates(query: &str) -> Vec<&'static Template> {
    let query = query.trim().to_lowercase();
    TEMPLATES
        .iter()
        .filter(|t| {
            query.is_empty()
                || [t.name, t.description, t.sql]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&query))
        })
        .collect()
}
