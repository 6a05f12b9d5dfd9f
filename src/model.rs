// src/model.rs
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// メニュー項目の識別子。バックエンドは数値 ID と文字列 ID の両方を返しうるため
/// untagged で受ける (例: `"id": 3` / `"id": "settings"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuId {
    Num(i64),
    Text(String),
}

/// バックエンドから届くフラットなメニュー定義 1 件分
///
/// `pid` が親メニューの `id` を指すことでツリー構造を表現する。
/// `pid` が無い (null / 欠落) 項目がトップレベルになる。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDescriptor {
    /// メニュー項目の一意な識別子
    pub id: MenuId,

    /// 親メニューの識別子。null または欠落ならトップレベル
    #[serde(default)]
    pub pid: Option<MenuId>,

    /// ルートのパス (例: "/website/torrent")
    pub path: String,

    /// ルート名 (一意)
    pub name: String,

    /// リダイレクト先のパス。検証せずそのまま出力に引き継ぐ
    #[serde(default)]
    pub redirect: Option<String>,

    /// ビューコンポーネントのシンボル名 (例: "WebsiteTorrents")。
    /// resolver 側でファクトリに解決する
    #[serde(default)]
    pub component: Option<String>,

    /// 表示タイトル (i18n キー)。コンパイラは中身を解釈しない
    pub title: String,

    /// アイコン名。コンパイラは中身を解釈しない
    pub icon: String,

    /// keep-alive ヒント。そのまま meta に引き継ぐ
    #[serde(default)]
    pub keep_alive: bool,
}

/// ルーターがマウントするビューの最小表現。描画自体は本コアの責務外
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// 子ルート用の入れ子アウトレットを描画するコンテナ
    NestedOutlet,
    /// 何も描画しない構造用プレースホルダ
    Empty,
    /// 登録済みのページビュー (値は登録名)
    Page(String),
}

/// ビューを遅延生成するゼロ引数ファクトリ
pub type Loader = Arc<dyn Fn() -> View + Send + Sync>;

/// 解決済みのビューコンポーネント。`load()` で実際のビューを生成する
#[derive(Clone)]
pub struct ComponentFactory {
    name: String,
    loader: Loader,
}

impl ComponentFactory {
    pub fn new(name: impl Into<String>, loader: Loader) -> Self {
        ComponentFactory {
            name: name.into(),
            loader,
        }
    }

    /// レジストリ上の登録名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ビューを生成する (vue-router の `() => import(...)` 相当)
    pub fn load(&self) -> View {
        (self.loader)()
    }
}

// ファクトリの等価性・表示・JSON 化はすべて登録名ベース。
// クロージャ自体は比較も表示もできない
impl PartialEq for ComponentFactory {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for ComponentFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComponentFactory").field(&self.name).finish()
    }
}

impl Serialize for ComponentFactory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// コンパイル済みルートノードが持つメタ情報。
/// 元のメニュー定義からそのまま写し取る
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMeta {
    pub title: String,
    pub icon: String,
    pub id: MenuId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<MenuId>,
    #[serde(rename = "keepAlive")]
    pub keep_alive: bool,
}

/// コンパイル済みのルートツリー 1 ノード分。外部ルーターがそのまま消費する
///
/// `children` は空のときフィールドごと省略する (None)。ルーターは
/// 「children キーの有無」でリーフか入れ子アウトレット持ちかを判別するため、
/// 空配列を出力してはならない
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteNode {
    pub path: String,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,

    /// 解決済みコンポーネント。未解決 (レジストリ未登録) なら None のまま通す
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentFactory>,

    pub meta: RouteMeta,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RouteNode>>,
}
