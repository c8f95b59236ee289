// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod companies_test;
pub mod reviews_test;
pub mod tenant_test;
