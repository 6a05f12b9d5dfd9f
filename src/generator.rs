use crate::model::{MenuDescriptor, MenuId, RouteMeta, RouteNode};
use crate::resolver::ComponentRegistry;

/// フラットなメニュー定義列からルートツリー (フォレスト) を生成する。
///
/// - `menus`: バックエンドが返したメニュー定義。並び順は変更せずそのまま出力順になる
///   (sort_id 等による並べ替えはメニューストア側の責務)
/// - `registry`: シンボル名をビューファクトリに解決するレジストリ
/// - `parent`: この呼び出しで集める子の親 ID。None ならトップレベル (pid なし) を集める
///
/// 戻り値:
/// - `parent` 直下のルートノード列。空もありうる (トップレベルで空なら
///   「表示できるナビゲーションがない」という意味であってエラーではない)
///
/// 入力の不整合はすべて縮退動作で吸収し、この関数自体は決して失敗しない:
/// - どの `id` とも一致しない `pid` → その項目はどのツリーにも現れない
/// - 循環参照 (`pid == id` を含む) → 最初の再訪で打ち切り、子なしとして出力
pub fn generate(
    menus: &[MenuDescriptor],
    registry: &ComponentRegistry,
    parent: Option<&MenuId>,
) -> Vec<RouteNode> {
    // 再帰経路上に現れた ID を積むスタック。再訪検出 (循環の打ち切り) に使う
    let mut visiting: Vec<MenuId> = parent.cloned().into_iter().collect();
    build_level(menus, registry, parent, &mut visiting)
}

/// 1 階層分のルートノード列を組み立てる再帰本体
fn build_level(
    menus: &[MenuDescriptor],
    registry: &ComponentRegistry,
    parent: Option<&MenuId>,
    visiting: &mut Vec<MenuId>,
) -> Vec<RouteNode> {
    let mut routes: Vec<RouteNode> = Vec::new();

    // 1) 入力順を保ったまま、pid が parent と一致する項目だけを選ぶ
    //    (pid なしと parent なしは同じ「トップレベル」扱い)
    for item in menus.iter().filter(|m| same_parent(m.pid.as_ref(), parent)) {
        // 2) 子を再帰的に組み立てる。ID が再帰経路上に既にあれば循環なので
        //    降りずに「子なし」とする
        let children = if visiting.contains(&item.id) {
            Vec::new()
        } else {
            visiting.push(item.id.clone());
            let result = build_level(menus, registry, Some(&item.id), visiting);
            visiting.pop();
            result
        };

        // 3) ノードを構築。children は空なら付けない (空配列は出力しない)
        routes.push(RouteNode {
            path: item.path.clone(),
            name: item.name.clone(),
            redirect: item.redirect.clone(),
            component: registry.resolve(item.component.as_deref()),
            meta: RouteMeta {
                title: item.title.clone(),
                icon: item.icon.clone(),
                id: item.id.clone(),
                pid: item.pid.clone(),
                keep_alive: item.keep_alive,
            },
            children: if children.is_empty() {
                None
            } else {
                Some(children)
            },
        });
    }

    routes
}

/// pid と親 ID の一致判定。「どちらもなし」もトップレベル同士として一致とみなす
fn same_parent(pid: Option<&MenuId>, parent: Option<&MenuId>) -> bool {
    match (pid, parent) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// 生成済みフォレストをアプリケーションシェルのルートノード配下にぶら下げる。
///
/// `root` の浅いコピーを作り、children をフォレストで置き換える。
/// メニュー由来のノードと違い、ルートシェルは固定の構造なので
/// フォレストが空でも children は空列のまま残す (省略しない)
pub fn wrap_root(root: &RouteNode, forest: Vec<RouteNode>) -> RouteNode {
    let mut wrapped = root.clone();
    wrapped.children = Some(forest);
    wrapped
}
