#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    Pass,
    Fail,
    Warning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableResult {
    pub status: RenderableStatus,
    pub element_type: String,
    pub element_name: Option<String>,
    pub actual_value: String,
    pub required_value: String,
    pub comment: Option<String>,
    pub log: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub source: String,
    pub doors_checked: u32,
    pub doors_compliant: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub results: Vec<RenderableResult>,
    pub data: RenderableData,
}
