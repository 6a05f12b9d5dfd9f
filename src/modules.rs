use crate::model::{MenuId, RouteMeta, RouteNode};
use crate::resolver::{ComponentRegistry, ROUTE_VIEW};

/// ダッシュボードに同梱されるページビューの登録名一覧
///
/// バックエンドのメニュー定義がシンボル名で参照するのはこれらのビュー。
/// 新しいページを追加したらここに登録名を足す
const PAGE_MODULES: &[&str] = &[
    "DashboardAnalysis",
    "Website",
    "WebsiteTorrents",
    "Downloader",
    "DownloadRepeat",
    "DownloadBrush",
    "Tasks",
    "SystemSetting",
    "HostsSetting",
    "SupervisorSetting",
    "LogsTool",
    "ShellTool",
    "ImportTool",
];

/// 同梱ページビューをすべて登録したレジストリを構築する。
/// プロセス起動時に一度だけ呼び、以降は読み取り専用で使う
pub fn default_registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    for name in PAGE_MODULES {
        registry.register_page(*name);
    }
    registry
}

/// アプリケーションシェルのルートノード。
/// 生成したフォレストはこのノードの配下にぶら下げてルーターに渡す
pub fn root_route(registry: &ComponentRegistry) -> RouteNode {
    RouteNode {
        path: "/".to_string(),
        name: "index".to_string(),
        redirect: Some("/dashboard/analysis".to_string()),
        component: registry.resolve(Some(ROUTE_VIEW)),
        meta: RouteMeta {
            title: "layouts.index".to_string(),
            icon: String::new(),
            id: MenuId::Num(0),
            pid: None,
            keep_alive: false,
        },
        children: None,
    }
}
