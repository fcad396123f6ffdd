//! Column layout of the eBay sales export

/// Zero-based positions of the fields the converter reads from each export row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLayout {
    /// Rows narrower than this are treated as trailing garbage
    pub min_width: usize,
    pub order_id: usize,
    pub full_name: usize,
    pub phone: usize,
    pub email: usize,
    pub address: [usize; 4],
    pub postcode: usize,
    /// Empty on a multi-purchase header row
    pub item_id: usize,
    pub price: usize,
}

impl SourceLayout {
    /// Layout of the eBay "sales record" download.
    pub const EBAY: SourceLayout = SourceLayout {
        min_width: 37,
        order_id: 0,
        full_name: 2,
        phone: 3,
        email: 4,
        address: [5, 6, 7, 8],
        postcode: 9,
        item_id: 11,
        price: 15,
    };
}

impl Default for SourceLayout {
    fn default() -> Self {
        Self::EBAY
    }
}

/// Maximum number of malformed rows tolerated before the run is aborted.
pub const MAX_SKIPPED_ROWS: usize = 2;
