//! 本地 key-value 存储
//!
//! 浏览器版把购物车与凭证放在 `localStorage`；这里用单一 JSON
//! 档案承担同一份契约：显式的 get/set/remove，单用户、无并发。

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::ClientResult;

/// 购物车存储键
pub const KEY_CART: &str = "shoppingCart";
/// 登入凭证存储键
pub const KEY_TOKEN: &str = "authToken";

/// File-backed local store
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    /// 以指定档案为存储 (不存在时视为空)
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 读取并反序列化；键不存在或资料损坏时回 None
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let map = self.load();
        map.get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Write a typed value under the key
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> ClientResult<()> {
        let mut map = self.load();
        map.insert(key.to_string(), serde_json::to_value(value)?);
        self.save(&map)
    }

    /// Remove the key (missing key is fine)
    pub fn remove(&self, key: &str) -> ClientResult<()> {
        let mut map = self.load();
        if map.remove(key).is_some() {
            self.save(&map)?;
        }
        Ok(())
    }

    fn load(&self) -> Map<String, Value> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| serde_json::from_str::<Value>(&text).ok())
            .and_then(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default()
    }

    fn save(&self, map: &Map<String, Value>) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(map)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = LocalStore::new(dir.path().join("store.json"));

        assert_eq!(store.get::<String>(KEY_TOKEN), None);

        store.set(KEY_TOKEN, &"abc.def.ghi".to_string()).expect("set");
        assert_eq!(store.get::<String>(KEY_TOKEN), Some("abc.def.ghi".to_string()));

        store.remove(KEY_TOKEN).expect("remove");
        assert_eq!(store.get::<String>(KEY_TOKEN), None);
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json at all").expect("write");

        let store = LocalStore::new(&path);
        assert_eq!(store.get::<String>(KEY_TOKEN), None);

        // 写入会覆盖坏档
        store.set(KEY_TOKEN, &"t".to_string()).expect("set");
        assert_eq!(store.get::<String>(KEY_TOKEN), Some("t".to_string()));
    }
}
