use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{ComponentFactory, Loader, View};

/// 入れ子アウトレット用コンテナの予約名
pub const ROUTE_VIEW: &str = "RouteView";

/// 何も描画しない構造用プレースホルダの予約名
pub const BLANK_VIEW: &str = "BlankView";

/// シンボル名 → ビューファクトリのレジストリ。
///
/// プロセス起動時に一度だけ構築し、以降は読み取り専用で使う。
/// ルートツリー生成中にレジストリを書き換えることはない。
///
/// 予約名 2 つ (`RouteView` / `BlankView`) はユーザ登録とは別枠で常に解決できる。
/// ユーザが同名を登録しても予約ファクトリが優先される。
pub struct ComponentRegistry {
    route_view: Loader,
    blank_view: Loader,
    entries: HashMap<String, Loader>,
}

impl ComponentRegistry {
    /// 予約ファクトリ 2 つだけを持つ空のレジストリを作る
    pub fn new() -> Self {
        ComponentRegistry {
            route_view: Arc::new(|| View::NestedOutlet),
            blank_view: Arc::new(|| View::Empty),
            entries: HashMap::new(),
        }
    }

    /// 任意のファクトリを登録する
    pub fn register(&mut self, name: impl Into<String>, loader: Loader) {
        self.entries.insert(name.into(), loader);
    }

    /// 登録名と同名のページビューを生成するファクトリを登録するショートカット
    pub fn register_page(&mut self, name: impl Into<String>) {
        let name = name.into();
        let page = name.clone();
        self.register(name, Arc::new(move || View::Page(page.clone())));
    }

    /// シンボル名をビューファクトリに解決する。
    ///
    /// - 名前なし (None / 空文字) → `BlankView` ファクトリ
    /// - 予約名                   → 対応する予約ファクトリ
    /// - 登録済みの名前           → 登録されたファクトリ
    /// - それ以外                 → None (呼び出し側がそのまま引き継ぐ)
    ///
    /// 未登録の名前でも panic やエラーにはしない。1 件の設定ミスで
    /// ツリー全体の生成が止まらないよう、解決は常に完走する。
    /// 未解決ノードはルーターがマウントを試みた時点で初めて問題になる
    pub fn resolve(&self, name: Option<&str>) -> Option<ComponentFactory> {
        match name {
            None | Some("") => Some(ComponentFactory::new(BLANK_VIEW, self.blank_view.clone())),
            Some(ROUTE_VIEW) => Some(ComponentFactory::new(ROUTE_VIEW, self.route_view.clone())),
            Some(BLANK_VIEW) => Some(ComponentFactory::new(BLANK_VIEW, self.blank_view.clone())),
            Some(other) => self
                .entries
                .get(other)
                .map(|loader| ComponentFactory::new(other, loader.clone())),
        }
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
