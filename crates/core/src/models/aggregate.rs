use serde::ser::{Serialize, SerializeMap, Serializer};

/// 一个请求的聚合响应
///
/// 按配置的Worker顺序保存`(标签, 文本)`条目，每个配置的Worker恰好一条，
/// 与各Worker成败无关。序列化为单层JSON对象，键的顺序即配置顺序，
/// 因此同样的配置下响应形状是确定的。响应发送后即丢弃。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AggregateResponse {
    entries: Vec<(String, String)>,
}

impl AggregateResponse {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == label)
            .map(|(_, text)| text.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AggregateResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, text) in &self.entries {
            map.serialize_entry(label, text)?;
        }
        map.end()
    }
}
