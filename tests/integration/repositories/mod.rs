// Copyright (c) 2025 Annuaire
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod category_count_test;
pub mod company_repository_test;
pub mod review_repository_test;
