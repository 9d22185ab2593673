// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 加载器模块
///
/// 把静态JSON文件读成扁平属性包
pub mod loader;
