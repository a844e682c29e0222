// ABOUTME: Utility modules for common functionality across the application
// ABOUTME: Contains HTML escaping helpers used by the dashboard renderer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// HTML escaping utilities
pub mod html;
