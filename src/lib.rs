//  ____  ____       ____        _ _
// |  _ \|  _ \ __ _/ ___| _   _(_) |_ ___
// | |_) | |_) / _` \___ \| | | | | __/ _ \
// |  _ <|  __/ (_| |___) | |_| | | ||  __/
// |_| \_\_|   \__,_|____/ \__,_|_|\__\___|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-05
// Version : 0.1.0
// License : Mulan PSL v2
//
// A password generation and strength estimation toolkit written in Rust.

pub mod commands;
pub mod configtool;
pub mod passgen;
pub mod setclip;
pub mod strength;
