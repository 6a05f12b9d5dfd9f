// src/lib.rs
//
// バックエンドが返すフラットなメニュー定義 (id / pid の自己参照リスト) を、
// ルーターがそのまま消費できる階層ルートツリーへ変換するライブラリ。
// コンポーネント名の解決はレジストリ経由で行い、生成は常に完走する
// (循環は打ち切り、孤児は落とし、未解決コンポーネントはそのまま通す)。

pub mod generator;
pub mod model;
pub mod modules;
pub mod resolver;

pub use generator::{generate, wrap_root};
pub use model::{ComponentFactory, MenuDescriptor, MenuId, RouteMeta, RouteNode, View};
pub use resolver::{ComponentRegistry, BLANK_VIEW, ROUTE_VIEW};
