// src/main.rs

use clap::Parser;
use std::fs;
use std::path::PathBuf;

use menu_route_generator::generator::{generate, wrap_root};
use menu_route_generator::model::MenuDescriptor;
use menu_route_generator::modules::{default_registry, root_route};

/// CLI 引数定義
#[derive(Parser, Debug)]
#[command(
    name = "Menu Route Generator",
    version = "0.1.0",
    about = "バックエンドのメニュー定義 (JSON) から階層ルートツリーを生成して JSON 出力する CLI ツール"
)]
struct Cli {
    /// メニュー定義の JSON ファイル (MenuDescriptor の配列)
    /// 例: `--menu-file ./menus.json`
    #[arg(short = 'm', long = "menu-file", value_name = "FILE")]
    menu_file: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1) CLI 引数をパースし、メニュー定義ファイルを読み込む
    let cli = Cli::parse();
    let src = fs::read_to_string(&cli.menu_file)?;

    // 2) JSON をデコード。メニュー定義の形が不正ならここで終了
    let menus: Vec<MenuDescriptor> = serde_json::from_str(&src)?;
    println!("読み込み完了: {} 件のメニュー定義 ({:?})", menus.len(), cli.menu_file);

    // 3) 同梱ビューを登録したレジストリを構築し、ルートツリーを生成
    let registry = default_registry();
    let forest = generate(&menus, &registry, None);
    if forest.is_empty() {
        // 空はエラーではなく「表示できるナビゲーションがない」という状態
        eprintln!("警告: トップレベルのメニューが 1 件もありません。");
    }

    // 4) アプリケーションシェルのルート配下にぶら下げ、JSON 化して標準出力
    let tree = wrap_root(&root_route(&registry), forest);
    let json = serde_json::to_string_pretty(&tree)?;
    println!("{}", json);

    Ok(())
}
