// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod data_entry_scenario_test;
pub mod warehouse_scenario_test;
