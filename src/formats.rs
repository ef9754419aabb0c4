use serde::{Deserialize, Serialize};

/// One catalog record per source PDF. Serialized with the camelCase keys the
/// catalog UI consumes; every key is always present, with `null` standing in
/// for fields that could not be extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub title: String,
    pub author: String,
    pub num_pages: Option<usize>,
    pub creation_date: String,
    pub read_time: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub rating: f64,
    pub signature: Signature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[serde(rename = "Very Hard")]
    VeryHard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signature {
    #[serde(rename = "RE")]
    Re,
    #[serde(rename = "JE")]
    Je,
}
