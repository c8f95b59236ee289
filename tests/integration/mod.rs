// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod api;
pub mod helpers;
pub mod repositories;
