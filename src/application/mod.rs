// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Apply 模块
///
/// 将已构建的实体树按父先子后的顺序物化到远程系统
pub mod apply;
